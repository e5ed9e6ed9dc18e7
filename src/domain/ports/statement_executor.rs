//! Statement Executor Port
//!
//! One implementation per transport: the local client binary, or the same
//! binary run through the shared remote session.

use crate::domain::services::RenderedStatement;
use crate::domain::value_objects::TransportKind;
use crate::error::RowpushResult;

/// Runs a rendered statement for one target
pub trait StatementExecutor: Send + Sync {
    /// Transport this executor implements; reported in `Executing` / `Succeeded` events
    fn kind(&self) -> TransportKind;

    /// Run `statement` to completion on behalf of `target`.
    ///
    /// A non-zero client exit status is an error.
    fn execute(&self, target: &str, statement: &RenderedStatement) -> RowpushResult<()>;
}
