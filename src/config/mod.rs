//! Configuration module for Rowpush
//!
//! Resolution order:
//! 1. `--config PATH` (its directory becomes the working root)
//! 2. `rowpush.yaml` in the current directory or any parent
//! 3. User config (`~/.config/rowpush/rowpush.yaml`)
//!
//! Passwords left empty in the file may be supplied through
//! `ROWPUSH_DB_PASSWORD` / `ROWPUSH_SSH_PASSWORD`.

mod loader;
mod resolve;
mod starter;
mod types;

pub use loader::{
    apply_env_overrides, load, load_with_warnings, locate, ConfigWarning, LoadedConfig,
    CONFIG_FILE_NAME,
};
pub use resolve::{resolve, ResolvedConfig};
pub use starter::{render_starter, write_starter};
pub use types::{
    ConfigFile, DatabaseConfig, ProfileConfig, SshConfig, TargetConfig, TargetOptions,
    DEFAULT_CLIENT, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_SCHEMA,
    SHARED_TARGET_KEY,
};
