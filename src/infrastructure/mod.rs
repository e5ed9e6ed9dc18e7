//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `session/` - The shared SSH session (manager + libssh2 connector)
//! - `transport/` - Local and remote statement executors
//! - `events/` - Machine-readable event sink

pub mod events;
pub mod session;
pub mod transport;

// Re-export for convenience
pub use events::JsonEventSink;
pub use session::{SessionManager, SessionState, Ssh2Connector, Ssh2Shell};
pub use transport::{probe_client, LocalExecutor, RemoteExecutor};
