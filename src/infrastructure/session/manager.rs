//! Session Manager
//!
//! Lifecycle: `Unopened -> (opening) -> Open -> Closed`.
//!
//! The check-and-create in `ensure_open` runs under one mutex, so however many
//! targets ask for the session at once, the connector dials exactly once. A
//! failed dial is remembered: later callers get the same failure without any
//! further I/O. Commands run outside the lock; each gets its own channel over
//! the shared connection.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{RemoteConnector, RemoteShell};
use crate::error::{RowpushError, RowpushResult};

/// Observable state of a session manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unopened,
    Open,
    Failed,
    Closed,
}

enum Slot<S> {
    Unopened,
    Open(Arc<S>),
    Failed(String),
    Closed,
}

pub struct SessionManager<C: RemoteConnector> {
    connector: C,
    slot: Mutex<Slot<C::Shell>>,
}

impl<C: RemoteConnector> SessionManager<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            slot: Mutex::new(Slot::Unopened),
        }
    }

    pub fn state(&self) -> SessionState {
        match &*self.lock() {
            Slot::Unopened => SessionState::Unopened,
            Slot::Open(_) => SessionState::Open,
            Slot::Failed(_) => SessionState::Failed,
            Slot::Closed => SessionState::Closed,
        }
    }

    /// Open the session unless it is already open.
    pub fn ensure_open(&self) -> RowpushResult<()> {
        self.shell().map(|_| ())
    }

    /// Run `command_line` on a fresh channel and return its exit status.
    pub fn execute(&self, command_line: &str) -> RowpushResult<i32> {
        let shell = self.shell()?;
        shell.run(command_line)
    }

    /// Release the connection. A no-op when nothing was ever opened, and
    /// safe to call more than once.
    pub fn close(&self) -> RowpushResult<()> {
        let previous = std::mem::replace(&mut *self.lock(), Slot::Closed);
        match previous {
            Slot::Open(shell) => {
                tracing::debug!(remote = %self.connector.describe(), "closing remote session");
                shell.disconnect()
            }
            _ => Ok(()),
        }
    }

    fn shell(&self) -> RowpushResult<Arc<C::Shell>> {
        let mut slot = self.lock();
        match &*slot {
            Slot::Open(shell) => return Ok(Arc::clone(shell)),
            Slot::Failed(reason) => {
                return Err(RowpushError::SessionUnavailable {
                    reason: reason.clone(),
                })
            }
            Slot::Closed => {
                return Err(RowpushError::SessionUnavailable {
                    reason: "session already closed".to_string(),
                })
            }
            Slot::Unopened => {}
        }

        tracing::debug!(remote = %self.connector.describe(), "opening remote session");
        match self.connector.connect() {
            Ok(shell) => {
                let shell = Arc::new(shell);
                *slot = Slot::Open(Arc::clone(&shell));
                Ok(shell)
            }
            Err(err) => {
                *slot = Slot::Failed(err.to_string());
                Err(err)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<C::Shell>> {
        // A panic while holding the lock leaves the slot itself consistent.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C: RemoteConnector> Drop for SessionManager<C> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(error = %err, "failed to close remote session");
        }
    }
}
