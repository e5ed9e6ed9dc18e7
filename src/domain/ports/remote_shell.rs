//! Remote Shell Port
//!
//! Separates dialing a remote host from running commands on it, so the
//! session lifecycle can be driven by a fake connector in tests.

use crate::error::RowpushResult;

/// An open, authenticated connection able to run command lines.
///
/// `run` must be callable from several threads at once; each call uses its
/// own command channel over the one connection.
pub trait RemoteShell: Send + Sync {
    /// Run one command line to completion and return its exit status.
    fn run(&self, command_line: &str) -> RowpushResult<i32>;

    /// Release the underlying connection.
    fn disconnect(&self) -> RowpushResult<()>;
}

/// Opens remote shells.
pub trait RemoteConnector: Send + Sync {
    type Shell: RemoteShell;

    /// Dial and authenticate. Called at most once per session manager.
    fn connect(&self) -> RowpushResult<Self::Shell>;

    /// `host:port` being dialed (for messages)
    fn describe(&self) -> String;
}
