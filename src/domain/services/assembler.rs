//! Artifact Assembler
//!
//! Produces the document stored for a target:
//!
//! ```text
//! <script>        (only if the script file exists)
//! ...script...
//! </script>
//! <style>         (only if the stylesheet exists)
//! ...stylesheet...
//! </style>
//! ...html...
//! ```
//!
//! Sections are joined with a single `\n`. File bytes are copied verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Target;
use crate::domain::ports::{EmbedKind, SyncEvent, SyncEventSink};
use crate::error::{RowpushError, RowpushResult};

pub const SCRIPT_OPEN: &str = "<script>";
pub const SCRIPT_CLOSE: &str = "</script>";
pub const STYLE_OPEN: &str = "<style>";
pub const STYLE_CLOSE: &str = "</style>";

pub struct ArtifactAssembler<'a> {
    /// Working root; embedded paths are reported relative to it
    root: &'a Path,
    events: &'a dyn SyncEventSink,
}

impl<'a> ArtifactAssembler<'a> {
    pub fn new(root: &'a Path, events: &'a dyn SyncEventSink) -> Self {
        Self { root, events }
    }

    /// Assemble the artifact of `target`.
    pub fn assemble(&self, target: &Target) -> RowpushResult<Vec<u8>> {
        if !target.html.is_file() {
            return Err(RowpushError::MissingRequiredFile {
                target: target.name.clone(),
                path: target.html.clone(),
            });
        }

        let mut sections: Vec<Vec<u8>> = Vec::with_capacity(7);

        if target.script.is_file() {
            let script = self.read(target, &target.script)?;
            self.embedded(target, EmbedKind::Script, &target.script);
            sections.push(SCRIPT_OPEN.as_bytes().to_vec());
            sections.push(script);
            sections.push(SCRIPT_CLOSE.as_bytes().to_vec());
        }

        if target.stylesheet.is_file() {
            let stylesheet = self.read(target, &target.stylesheet)?;
            self.embedded(target, EmbedKind::Stylesheet, &target.stylesheet);
            sections.push(STYLE_OPEN.as_bytes().to_vec());
            sections.push(stylesheet);
            sections.push(STYLE_CLOSE.as_bytes().to_vec());
        }

        sections.push(self.read(target, &target.html)?);

        Ok(sections.join(&b'\n'))
    }

    fn read(&self, target: &Target, path: &Path) -> RowpushResult<Vec<u8>> {
        fs::read(path).map_err(|source| RowpushError::ReadFile {
            target: target.name.clone(),
            path: path.to_path_buf(),
            source,
        })
    }

    fn embedded(&self, target: &Target, kind: EmbedKind, path: &Path) {
        self.events.on_event(SyncEvent::Embedded {
            target: target.name.clone(),
            kind,
            path: relative_to(self.root, path),
        });
    }
}

/// `path` relative to `root`, or `path` itself when it lies outside.
fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
