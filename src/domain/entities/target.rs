//! Target entity - a named HTML artifact bound to one destination row.

use std::path::PathBuf;

/// A fully resolved sync target.
///
/// Paths are absolute. The script and stylesheet paths always exist as
/// values; whether the files exist is decided at assembly time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Key of the target in the configuration
    pub name: String,
    /// Row identifier of the destination row
    pub alid: i64,
    pub html: PathBuf,
    pub script: PathBuf,
    pub stylesheet: PathBuf,
    /// Always deliver through the remote shell, even when a local client exists
    pub force_remote: bool,
}

impl Target {
    /// Create a target whose optional files sit next to the HTML file
    /// as `index.js` / `index.css`.
    pub fn new(name: impl Into<String>, alid: i64, html: impl Into<PathBuf>) -> Self {
        let html = html.into();
        let dir = html.parent().map(|p| p.to_path_buf()).unwrap_or_default();
        Self {
            name: name.into(),
            alid,
            script: dir.join("index.js"),
            stylesheet: dir.join("index.css"),
            html,
            force_remote: false,
        }
    }

    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.script = path.into();
        self
    }

    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = path.into();
        self
    }

    pub fn with_force_remote(mut self, force: bool) -> Self {
        self.force_remote = force;
        self
    }
}
