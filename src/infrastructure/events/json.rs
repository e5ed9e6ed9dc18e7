//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Units on different threads emit concurrently; one line per lock
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let json = match event {
            SyncEvent::ProfileSelected { profile } => serde_json::json!({
                "event": "profile",
                "command": "sync",
                "profile": profile,
            }),

            SyncEvent::ClientProbed { client, path } => serde_json::json!({
                "event": "client_probed",
                "command": "sync",
                "client": client,
                "found": path.is_some(),
                "path": path.map(|p| p.display().to_string()),
            }),

            SyncEvent::InsecureHostKey { addr } => serde_json::json!({
                "event": "insecure_host_key",
                "command": "sync",
                "addr": addr,
            }),

            SyncEvent::Embedded { target, kind, path } => serde_json::json!({
                "event": "embedded",
                "command": "sync",
                "target": target,
                "kind": kind.as_str(),
                "path": path.display().to_string(),
            }),

            SyncEvent::Rendered { target, content } => serde_json::json!({
                "event": "rendered",
                "command": "sync",
                "target": target,
                "content": String::from_utf8_lossy(&content),
            }),

            SyncEvent::Executing {
                target,
                transport,
                args,
            } => serde_json::json!({
                "event": "executing",
                "command": "sync",
                "target": target,
                "transport": transport,
                "args": args,
            }),

            SyncEvent::Succeeded { target, transport } => serde_json::json!({
                "event": "success",
                "command": "sync",
                "target": target,
                "transport": transport,
            }),
        };

        self.write_event(json);
    }
}
