//! Statement executors
//!
//! - `LocalExecutor`: runs the database client as a child process
//! - `RemoteExecutor`: runs the same invocation through the shared SSH session

mod local;
mod remote;

pub use local::{probe_client, LocalExecutor};
pub use remote::{remote_command_line, shell_quote, RemoteExecutor};
