//! Rowpush CLI - push HTML artifacts into database rows
//!
//! Usage: rowpush <COMMAND>
//!
//! Commands:
//!   sync    Push target artifacts into their database rows
//!   init    Write a starter rowpush.yaml

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rowpush::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::sync::SyncArgs;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    if let Err(err) = run(cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn run(cli: Cli, ui: &UiContext) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;

    match cli.command {
        Commands::Sync {
            targets,
            dry,
            config,
            profile,
        } => commands::sync::cmd_sync(
            &cwd,
            &SyncArgs {
                targets,
                dry,
                config,
                profile,
            },
            ui,
        ),
        Commands::Init => commands::init::cmd_init(&cwd, ui),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,rowpush={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
