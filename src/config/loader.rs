//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RowpushError, RowpushResult};

use super::types::ConfigFile;

pub const CONFIG_FILE_NAME: &str = "rowpush.yaml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A parsed configuration file and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub file: PathBuf,
    /// Directory holding `file`; relative target paths resolve against it
    pub root: PathBuf,
    pub config: ConfigFile,
    pub warnings: Vec<ConfigWarning>,
}

/// Find the configuration file.
///
/// An explicit path must name an existing regular file. Without one, walk
/// from `cwd` up to the filesystem root, then try the user config directory.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> RowpushResult<PathBuf> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        let metadata = fs::metadata(&path).map_err(|e| RowpushError::InvalidConfig {
            file: path.clone(),
            message: e.to_string(),
        })?;
        if metadata.is_dir() {
            return Err(RowpushError::InvalidConfigPath { path });
        }
        return Ok(path);
    }

    if let Some(found) = lookup(cwd) {
        return Ok(found);
    }

    if let Some(user_config) = user_config_file().filter(|p| p.is_file()) {
        return Ok(user_config);
    }

    Err(RowpushError::ConfigNotFound {
        name: CONFIG_FILE_NAME.to_string(),
        start: cwd.to_path_buf(),
    })
}

/// Walk from `start` upwards; directories named like the file are skipped.
fn lookup(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rowpush").join(CONFIG_FILE_NAME))
}

/// Locate, parse and apply environment overrides.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> RowpushResult<LoadedConfig> {
    let file = locate(explicit, cwd)?;
    tracing::debug!(file = %file.display(), "using configuration");

    let (config, warnings) = load_with_warnings(&file)?;
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    let root = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());

    Ok(LoadedConfig {
        file,
        root,
        config,
        warnings,
    })
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// YAML merge keys (`<<: *anchor`) are expanded before deserializing.
pub fn load_with_warnings(path: &Path) -> RowpushResult<(ConfigFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let invalid = |message: String| RowpushError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let mut document: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    if document.is_null() {
        return Ok((ConfigFile::default(), Vec::new()));
    }
    document.apply_merge().map_err(|e| invalid(e.to_string()))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let config: ConfigFile = serde_ignored::deserialize(document, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Fill empty passwords from `ROWPUSH_DB_PASSWORD` / `ROWPUSH_SSH_PASSWORD`.
///
/// Values written in the file always win.
pub fn apply_env_overrides<F>(mut config: ConfigFile, env: F) -> ConfigFile
where
    F: Fn(&str) -> Option<String>,
{
    let db_password = env("ROWPUSH_DB_PASSWORD").filter(|v| !v.is_empty());
    let ssh_password = env("ROWPUSH_SSH_PASSWORD").filter(|v| !v.is_empty());

    for profile in config.profiles.values_mut() {
        if is_blank(&profile.database.password) {
            if let Some(password) = &db_password {
                profile.database.password = Some(password.clone());
            }
        }
        if is_blank(&profile.ssh.password) {
            if let Some(password) = &ssh_password {
                profile.ssh.password = Some(password.clone());
            }
        }
    }

    config
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "profile",
        "target",
        "ssh",
        "database",
        "host",
        "port",
        "user",
        "password",
        "schema",
        "client",
        "alid",
        "html",
        "script",
        "stylesheet",
        "options",
        "force-ssh",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
