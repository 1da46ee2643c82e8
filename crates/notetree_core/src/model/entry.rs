//! Category and note read models.
//!
//! # Invariants
//! - `path` is the absolute (root-joined) location used for I/O.
//! - `relative` is `path` with the notes root stripped, used for display.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A directory under the notes root grouping notes and nested categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Root-joined directory path.
    pub path: PathBuf,
    /// Path relative to the notes root.
    pub relative: PathBuf,
}

impl Category {
    /// Builds a category from a walked directory path.
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = relative_to(root, &path);
        Self { path, relative }
    }
}

/// A Markdown file under the notes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Root-joined file path, handed to the editor.
    pub path: PathBuf,
    /// Path relative to the notes root.
    pub relative: PathBuf,
    /// Last modification time, used for recency ranking.
    pub modified: SystemTime,
}

impl Note {
    /// Builds a note from a walked file path and its modification time.
    pub fn new(root: &Path, path: PathBuf, modified: SystemTime) -> Self {
        let relative = relative_to(root, &path);
        Self {
            path,
            relative,
            modified,
        }
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
