//! Remote transport: the client invoked through the shared SSH session.
//!
//! The remote side receives one shell command line, so every argument is
//! single-quoted before it is joined.

use crate::domain::ports::{RemoteConnector, StatementExecutor};
use crate::domain::services::RenderedStatement;
use crate::domain::value_objects::TransportKind;
use crate::error::{RowpushError, RowpushResult};
use crate::infrastructure::session::SessionManager;

/// Quote `s` for a POSIX shell.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// `PGPASSWORD=<pw> <client> <args...>` with every word quoted.
pub fn remote_command_line(client: &str, password: &str, statement: &RenderedStatement) -> String {
    let mut line = format!("PGPASSWORD={} {}", shell_quote(password), shell_quote(client));
    for arg in statement.args() {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }
    line
}

/// Executes statements over a session shared by all remote targets.
pub struct RemoteExecutor<'a, C: RemoteConnector> {
    session: &'a SessionManager<C>,
    client: String,
    password: String,
}

impl<'a, C: RemoteConnector> RemoteExecutor<'a, C> {
    pub fn new(
        session: &'a SessionManager<C>,
        client: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            session,
            client: client.into(),
            password: password.into(),
        }
    }
}

impl<C: RemoteConnector> StatementExecutor for RemoteExecutor<'_, C> {
    fn kind(&self) -> TransportKind {
        TransportKind::Remote
    }

    fn execute(&self, target: &str, statement: &RenderedStatement) -> RowpushResult<()> {
        let line = remote_command_line(&self.client, &self.password, statement);
        let status = self.session.execute(&line)?;
        if status != 0 {
            return Err(RowpushError::CommandFailed {
                target: target.to_string(),
                program: format!("remote {}", self.client),
                status: format!("exit status: {status}"),
            });
        }
        Ok(())
    }
}
