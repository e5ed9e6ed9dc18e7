//! Connection profile - remote-shell and database credentials for one run.

use std::fmt;

use crate::error::{RowpushError, RowpushResult};

pub const DEFAULT_SSH_PORT: u16 = 22;

/// Database connection settings after defaulting and validation.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseCredentials {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub schema: String,
    /// Name or path of the database client binary (`psql`)
    pub client: String,
}

/// Remote shell settings as configured, before validation.
///
/// These are only validated when some target actually needs the remote
/// transport, so a profile without SSH credentials stays usable locally.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SshSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Remote shell settings after defaulting and validation.
#[derive(Clone, PartialEq, Eq)]
pub struct SshCredentials {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl SshCredentials {
    /// `host:port` as dialed over TCP
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SshSettings {
    /// Apply defaults and check the mandatory fields.
    ///
    /// The host falls back to `default_host` (the database host) and the port
    /// to 22. User and password must be non-empty.
    pub fn validate(&self, default_host: &str) -> RowpushResult<SshCredentials> {
        let user = non_empty(&self.user).ok_or(RowpushError::MissingCredential {
            field: "ssh.user",
        })?;
        let password = non_empty(&self.password).ok_or(RowpushError::MissingCredential {
            field: "ssh.password",
        })?;

        Ok(SshCredentials {
            host: non_empty(&self.host).unwrap_or(default_host).to_string(),
            port: self.port.filter(|p| *p != 0).unwrap_or(DEFAULT_SSH_PORT),
            user: user.to_string(),
            password: password.to_string(),
        })
    }
}

/// The single active profile of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub database: DatabaseCredentials,
    pub ssh: SshSettings,
}

impl Profile {
    /// Validated remote shell credentials for this profile.
    pub fn ssh_credentials(&self) -> RowpushResult<SshCredentials> {
        self.ssh.validate(&self.database.host)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for DatabaseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &redacted(&self.password))
            .field("database", &self.database)
            .field("schema", &self.schema)
            .field("client", &self.client)
            .finish()
    }
}

impl fmt::Debug for SshSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SshSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field(
                "password",
                &redacted(self.password.as_deref().unwrap_or_default()),
            )
            .finish()
    }
}

impl fmt::Debug for SshCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SshCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &redacted(&self.password))
            .finish()
    }
}
