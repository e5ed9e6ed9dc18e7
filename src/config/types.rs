//! Configuration type definitions

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::{DatabaseCredentials, SshSettings};
use crate::error::{RowpushError, RowpushResult};

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "postgres";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_CLIENT: &str = "psql";

/// Target key reserved for YAML anchors shared by the real targets
pub const SHARED_TARGET_KEY: &str = "*";

/// The whole `rowpush.yaml` document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default, rename = "profile")]
    pub profiles: BTreeMap<String, ProfileConfig>,

    #[serde(default, rename = "target")]
    pub targets: BTreeMap<String, TargetConfig>,
}

/// Named connection profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub ssh: SshConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SshConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    /// Client binary name or path, `psql` when unset
    #[serde(default)]
    pub client: Option<String>,
}

/// One `target.<name>` entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub alid: Option<i64>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub stylesheet: Option<String>,
    #[serde(default)]
    pub options: TargetOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetOptions {
    #[serde(default)]
    pub force_ssh: bool,
}

impl DatabaseConfig {
    /// Apply defaults; user and password are mandatory.
    pub fn validate(&self) -> RowpushResult<DatabaseCredentials> {
        let user = non_empty(&self.user).ok_or(RowpushError::MissingCredential {
            field: "database.user",
        })?;
        let password = non_empty(&self.password).ok_or(RowpushError::MissingCredential {
            field: "database.password",
        })?;

        Ok(DatabaseCredentials {
            host: or_default(&self.host, DEFAULT_DB_HOST),
            port: self.port.filter(|p| *p != 0).unwrap_or(DEFAULT_DB_PORT),
            user: user.to_string(),
            password: password.to_string(),
            database: or_default(&self.database, DEFAULT_DB_NAME),
            schema: or_default(&self.schema, DEFAULT_SCHEMA),
            client: or_default(&self.client, DEFAULT_CLIENT),
        })
    }
}

impl From<&SshConfig> for SshSettings {
    fn from(config: &SshConfig) -> Self {
        SshSettings {
            host: config.host.clone(),
            port: config.port,
            user: config.user.clone(),
            password: config.password.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn or_default(value: &Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}
