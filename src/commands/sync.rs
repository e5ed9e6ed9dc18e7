//! Sync command - deliver the named targets

use std::path::{Path, PathBuf};

use anyhow::Result;

use rowpush::config::{self, ConfigWarning};
use rowpush::domain::ports::SyncEventSink;
use rowpush::infrastructure::JsonEventSink;
use rowpush::presentation::run_sync;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::sink::ConsoleEventSink;

pub struct SyncArgs {
    pub targets: Vec<String>,
    pub dry: bool,
    pub config: Option<PathBuf>,
    pub profile: String,
}

pub fn cmd_sync(cwd: &Path, args: &SyncArgs, ui: &UiContext) -> Result<()> {
    let loaded = config::load(args.config.as_deref(), cwd)?;
    if !ui.json {
        print_config_warnings(&loaded.warnings, ui);
    }

    let resolved = config::resolve(&loaded.config, &loaded.root, &args.profile, &args.targets)?;

    let sink: Box<dyn SyncEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(*ui))
    };

    run_sync(&resolved, args.dry, sink.as_ref())?;
    Ok(())
}

fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let mut message = format!(
            "{} unknown config key '{}' in {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            warning.key,
            location
        );
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        eprintln!("{}", message);
    }
}
