//! Sync Event Port
//!
//! Provides an observable interface for sync operations.
//! Every human-readable trace line of a run is one of these events.

use std::path::PathBuf;

use crate::domain::value_objects::TransportKind;

/// Which optional file was inlined into an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    Script,
    Stylesheet,
}

impl EmbedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedKind::Script => "script",
            EmbedKind::Stylesheet => "stylesheet",
        }
    }
}

/// Event emitted during a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The active connection profile was resolved
    ProfileSelected { profile: String },

    /// The local client binary was looked up on `PATH`
    ClientProbed {
        client: String,
        path: Option<PathBuf>,
    },

    /// A remote session will be used without verifying the server's host key
    InsecureHostKey { addr: String },

    /// An optional file was inlined (path relative to the working root)
    Embedded {
        target: String,
        kind: EmbedKind,
        path: PathBuf,
    },

    /// Dry run: the assembled artifact of one target
    Rendered { target: String, content: Vec<u8> },

    /// A statement is about to run; `args` never includes the statement text
    Executing {
        target: String,
        transport: TransportKind,
        args: Vec<String>,
    },

    /// The target's row was updated
    Succeeded {
        target: String,
        transport: TransportKind,
    },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleEventSink: Trace lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait SyncEventSink: Send + Sync {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
