//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--json`, `--color`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Rowpush - push HTML artifacts into database rows
#[derive(Parser, Debug)]
#[command(name = "rowpush")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push target artifacts into their database rows
    Sync {
        /// Target names from the configuration (case-insensitive)
        #[arg(value_name = "TARGETS")]
        targets: Vec<String>,

        /// Print the assembled artifacts instead of writing them
        #[arg(short, long)]
        dry: bool,

        /// Configuration file; its directory becomes the working root
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Connection profile to use
        #[arg(short, long, env = "ROWPUSH_PROFILE", default_value = "default")]
        profile: String,
    },

    /// Write a starter rowpush.yaml into the current directory
    Init,
}
