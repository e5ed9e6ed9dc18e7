//! Value Objects
//!
//! Immutable types without identity.

mod transport;

pub use transport::TransportKind;
