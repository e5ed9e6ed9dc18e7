//! Rowpush - push locally built HTML artifacts into database rows
//!
//! Each configured target is an HTML file (plus optional script and
//! stylesheet) bound to one row. A sync run assembles every requested target
//! and delivers it through the local `psql` client, or through a single SSH
//! session shared by all targets when the client is missing or a target
//! forces it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod template;

// Re-exports for convenience
pub use application::{dry_run, DispatchUseCase};
pub use config::{ConfigWarning, ResolvedConfig};
pub use domain::entities::{DatabaseCredentials, Profile, SshCredentials, SshSettings, Target};
pub use domain::ports::{SyncEvent, SyncEventSink};
pub use domain::value_objects::TransportKind;
pub use error::{RowpushError, RowpushResult};
pub use template::{render, Bindings, TemplateError};
