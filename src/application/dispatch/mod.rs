//! Dispatch Module
//!
//! Delivers every selected target concurrently.
//!
//! ## Structure
//!
//! - `use_case` - `DispatchUseCase` and the sequential `dry_run`
//!
//! ## Usage
//!
//! ```ignore
//! use rowpush::application::DispatchUseCase;
//!
//! let use_case = DispatchUseCase::new(&root, &profile.database, &sink)
//!     .with_local(&local)
//!     .with_remote(&remote);
//! use_case.run(&targets)?;
//! ```

mod use_case;

pub use use_case::{dry_run, DispatchUseCase};
