//! Human-readable trace lines on stderr.
//!
//! Dry-run content is the only thing written to stdout, so it can be piped.

use std::io::{self, Write};
use std::sync::Mutex;

use rowpush::domain::ports::{SyncEvent, SyncEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub struct ConsoleEventSink {
    ui: UiContext,
    err: Mutex<Box<dyn Write + Send>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self::with_writers(ui, io::stderr(), io::stdout())
    }

    pub fn with_writers<E, O>(ui: UiContext, err: E, out: O) -> Self
    where
        E: Write + Send + 'static,
        O: Write + Send + 'static,
    {
        Self {
            ui,
            err: Mutex::new(Box::new(err)),
            out: Mutex::new(Box::new(out)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn line(&self, text: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", text);
        }
    }

    fn format(&self, event: &SyncEvent) -> Option<String> {
        let line = match event {
            SyncEvent::ProfileSelected { profile } => format!("using \"{}\" profile", profile),
            SyncEvent::ClientProbed {
                client,
                path: Some(path),
            } => format!("using local {} executable ({})", client, path.display()),
            SyncEvent::ClientProbed { client, path: None } => format!(
                "{} {} executable not found, connecting through ssh",
                self.icon(Icon::Remote),
                client
            ),
            SyncEvent::InsecureHostKey { addr } => format!(
                "{} host key of {} is not verified",
                self.icon(Icon::Warning),
                addr
            ),
            SyncEvent::Embedded { target, kind, path } => format!(
                "[{}] embedding {} into html {} {}",
                target,
                kind.as_str(),
                self.icon(Icon::Arrow),
                path.display()
            ),
            SyncEvent::Executing {
                target,
                transport,
                args,
            } => {
                if self.ui.verbose == 0 {
                    return None;
                }
                format!(
                    "{} [{}] execute {:?} ({})",
                    self.icon(Icon::Progress),
                    target,
                    args.join(" "),
                    transport
                )
            }
            SyncEvent::Succeeded { target, transport } => format!(
                "{} [{}] success ({})",
                self.icon(Icon::Success),
                target,
                transport
            ),
            SyncEvent::Rendered { .. } => return None,
        };
        Some(line)
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let SyncEvent::Rendered { content, .. } = &event {
            if let Ok(mut out) = self.out.lock() {
                let _ = out.write_all(content);
                let _ = out.write_all(b"\n");
                let _ = out.flush();
            }
            return;
        }

        if let Some(line) = self.format(&event) {
            self.line(line);
        }
    }
}
