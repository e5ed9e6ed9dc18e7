//! Turn a parsed configuration into the immutable values a run works with.
//!
//! All defaulting and validation happens here, before any target is
//! dispatched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Profile, Target};
use crate::error::{RowpushError, RowpushResult};
use crate::template::{self, Bindings};

use super::types::{ConfigFile, ProfileConfig, TargetConfig, SHARED_TARGET_KEY};

/// Active profile plus the targets named on the command line, in argument order
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub profile: Profile,
    pub targets: Vec<Target>,
}

/// Resolve `profile` and the target `names` against `config`.
///
/// Names match case-insensitively. Any unknown name fails the whole call.
pub fn resolve(
    config: &ConfigFile,
    root: &Path,
    profile: &str,
    names: &[String],
) -> RowpushResult<ResolvedConfig> {
    let profile = resolve_profile(&config.profiles, profile)?;

    let configured: BTreeMap<&str, &TargetConfig> = config
        .targets
        .iter()
        .filter(|(name, _)| name.as_str() != SHARED_TARGET_KEY)
        .map(|(name, target)| (name.as_str(), target))
        .collect();

    if configured.is_empty() {
        return Err(RowpushError::NoTargetsConfigured);
    }
    if names.is_empty() {
        return Err(RowpushError::NoTargetSpecified);
    }

    tracing::debug!(targets = ?configured.keys().collect::<Vec<_>>(), "available targets");
    tracing::debug!(args = ?names, "command arguments");

    let targets = names
        .iter()
        .map(|requested| {
            let (name, target) = find_ignore_case(&configured, requested).ok_or_else(|| {
                RowpushError::UnknownTarget {
                    name: requested.clone(),
                }
            })?;
            build_target(root, name, target)
        })
        .collect::<RowpushResult<Vec<_>>>()?;

    Ok(ResolvedConfig {
        root: root.to_path_buf(),
        profile,
        targets,
    })
}

fn resolve_profile(
    profiles: &BTreeMap<String, ProfileConfig>,
    requested: &str,
) -> RowpushResult<Profile> {
    let requested = requested.trim();
    if requested.is_empty() {
        return Err(RowpushError::EmptyProfile);
    }

    let (name, profile) = profiles
        .iter()
        .find(|(name, _)| eq_fold(name, requested))
        .ok_or_else(|| RowpushError::ProfileNotFound {
            name: requested.to_string(),
        })?;

    Ok(Profile {
        name: name.clone(),
        database: profile.database.validate()?,
        ssh: (&profile.ssh).into(),
    })
}

fn find_ignore_case<'a>(
    configured: &BTreeMap<&'a str, &'a TargetConfig>,
    requested: &str,
) -> Option<(&'a str, &'a TargetConfig)> {
    configured
        .iter()
        .find(|(name, _)| eq_fold(name, requested))
        .map(|(name, target)| (*name, *target))
}

/// Case-insensitive comparison over full Unicode case folding
fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn build_target(root: &Path, name: &str, config: &TargetConfig) -> RowpushResult<Target> {
    let alid = config.alid.ok_or_else(|| RowpushError::MissingAlid {
        target: name.to_string(),
    })?;

    let default_dir = root.join(name);
    let html = target_path(root, name, config.html.as_deref(), default_dir.join("index.html"))?;
    let script = target_path(root, name, config.script.as_deref(), default_dir.join("index.js"))?;
    let stylesheet = target_path(
        root,
        name,
        config.stylesheet.as_deref(),
        default_dir.join("index.css"),
    )?;

    Ok(Target::new(name, alid, html)
        .with_script(script)
        .with_stylesheet(stylesheet)
        .with_force_remote(config.options.force_ssh))
}

/// Configured path rendered with `cwd` / `target`, or `default` when unset.
fn target_path(
    root: &Path,
    name: &str,
    configured: Option<&str>,
    default: PathBuf,
) -> RowpushResult<PathBuf> {
    let Some(source) = configured.filter(|s| !s.trim().is_empty()) else {
        return Ok(default);
    };

    let bindings = Bindings::from([
        ("cwd", root.display().to_string()),
        ("target", name.to_string()),
    ]);
    let rendered = PathBuf::from(template::render(source, &bindings)?);
    tracing::debug!(target_name = name, source, output = %rendered.display(), "resolved target path");

    if rendered.is_absolute() {
        Ok(rendered)
    } else {
        Ok(root.join(rendered))
    }
}
