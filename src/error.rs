//! Error types for Rowpush
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

/// Result type alias for Rowpush operations
pub type RowpushResult<T> = Result<T, RowpushError>;

/// Main error type for Rowpush operations
#[derive(Error, Debug)]
pub enum RowpushError {
    /// No configuration file found while walking up from the start directory
    #[error("configuration file '{name}' not found in {start} or any parent directory")]
    ConfigNotFound { name: String, start: PathBuf },

    /// Configuration path points at something that is not a regular file
    #[error("invalid configuration path {path} (is a directory)")]
    InvalidConfigPath { path: PathBuf },

    /// Configuration document could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    #[error("no profile specified (--profile | -p profile)")]
    EmptyProfile,

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    /// A mandatory credential is empty after defaulting
    #[error("{field} cannot be empty")]
    MissingCredential { field: &'static str },

    #[error("empty target list in configuration file")]
    NoTargetsConfigured,

    #[error("empty target argument(s)")]
    NoTargetSpecified,

    #[error("unknown target ({name}) in argument(s)")]
    UnknownTarget { name: String },

    #[error("[{target}] no alid configured for target")]
    MissingAlid { target: String },

    /// The target's HTML file is missing
    #[error(
        "[{target}] properly specify target html in configuration and make sure the file exists: {path} (not found)"
    )]
    MissingRequiredFile { target: String, path: PathBuf },

    #[error("[{target}] failed to read {path}: {source}")]
    ReadFile {
        target: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("[{target}] failed to start {program}: {source}")]
    Spawn {
        target: String,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Client binary (local or remote) finished with a non-zero status
    #[error("[{target}] {program} exited with {status}")]
    CommandFailed {
        target: String,
        program: String,
        status: String,
    },

    /// TCP dial or SSH handshake failed
    #[error("when connecting to ssh {addr}: {message}")]
    SshConnect { addr: String, message: String },

    #[error("ssh authentication failed for {user}@{addr}: {message}")]
    SshAuth {
        user: String,
        addr: String,
        message: String,
    },

    /// Opening or driving a command channel failed
    #[error("ssh command channel: {message}")]
    SshChannel { message: String },

    /// The shared remote session failed to open earlier, or was already closed
    #[error("remote session unavailable: {reason}")]
    SessionUnavailable { reason: String },

    #[error("[{target}] {transport} transport is not configured")]
    TransportUnavailable { target: String, transport: String },

    /// A unit skipped its transport step because another target already failed
    #[error("[{target}] cancelled after an earlier failure")]
    Cancelled { target: String },

    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RowpushError {
    /// Whether this error only reports that a unit stood down after another failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, RowpushError::Cancelled { .. })
    }
}
