//! Local transport: the database client binary found on `PATH`.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::StatementExecutor;
use crate::domain::services::RenderedStatement;
use crate::domain::value_objects::TransportKind;
use crate::error::{RowpushError, RowpushResult};

/// Locate `client` on the execution path.
///
/// Returns `None` when it is not installed; callers then route every target
/// through the remote transport.
pub fn probe_client(client: &str) -> Option<PathBuf> {
    match which::which(client) {
        Ok(path) => {
            tracing::debug!(client, path = %path.display(), "local client found");
            Some(path)
        }
        Err(err) => {
            tracing::debug!(client, error = %err, "local client not found");
            None
        }
    }
}

/// Executes statements with a local client process per target.
pub struct LocalExecutor {
    binary: PathBuf,
    password: String,
}

impl LocalExecutor {
    pub fn new(binary: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            password: password.into(),
        }
    }
}

impl StatementExecutor for LocalExecutor {
    fn kind(&self) -> TransportKind {
        TransportKind::Local
    }

    fn execute(&self, target: &str, statement: &RenderedStatement) -> RowpushResult<()> {
        let program = self.binary.display().to_string();

        // The password only ever lives in the child's environment.
        let status = Command::new(&self.binary)
            .args(statement.args())
            .env("PGPASSWORD", &self.password)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RowpushError::Spawn {
                target: target.to_string(),
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(RowpushError::CommandFailed {
                target: target.to_string(),
                program,
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
