//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DispatchUseCase` - Fans targets out across transports, first failure wins
//! - `dry_run` - Assemble and emit each target's artifact without delivering it

pub mod dispatch;

pub use dispatch::{dry_run, DispatchUseCase};
