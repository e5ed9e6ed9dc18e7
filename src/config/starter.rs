//! Starter configuration written by `rowpush init`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RowpushError, RowpushResult};
use crate::template::{self, Bindings};

use super::loader::CONFIG_FILE_NAME;

const STARTER_TEMPLATE: &str = include_str!("../templates/rowpush.yaml");

/// Starter document for a project living in `dir`
pub fn render_starter(dir: &Path) -> RowpushResult<String> {
    let bindings = Bindings::from([("conf_loc", dir.display().to_string())]);
    Ok(template::render(STARTER_TEMPLATE, &bindings)?)
}

/// Write the starter document to `<dir>/rowpush.yaml`; never overwrites.
pub fn write_starter(dir: &Path) -> RowpushResult<(PathBuf, String)> {
    let path = dir.join(CONFIG_FILE_NAME);

    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => return Err(RowpushError::InvalidConfigPath { path }),
        Ok(_) => return Err(RowpushError::AlreadyExists { path }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let content = render_starter(dir)?;
    fs::write(&path, &content)?;
    Ok((path, content))
}
