//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod remote_shell;
pub mod statement_executor;
pub mod sync_events;

pub use remote_shell::{RemoteConnector, RemoteShell};
pub use statement_executor::StatementExecutor;
pub use sync_events::{EmbedKind, NoopEventSink, SyncEvent, SyncEventSink};
