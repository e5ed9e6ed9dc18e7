//! Domain Layer
//!
//! Pure rules for turning a target into a database update, without knowing
//! how the update reaches the database.
//!
//! ## Structure
//!
//! - `entities/` - Resolved targets and connection profiles
//! - `value_objects/` - Small immutable types (TransportKind)
//! - `services/` - Artifact assembly, statement building, transport selection
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
