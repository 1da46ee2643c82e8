//! Recursive traversal primitive over the notes tree.
//!
//! # Responsibility
//! - Enumerate either Markdown files or directories below a root.
//! - Apply the optional substring pattern to each candidate's full path.
//!
//! # Invariants
//! - The pattern never prunes traversal; every subdirectory is entered.
//! - A missing (or non-directory) root yields an empty result.
//! - Symlinked directories are followed through every route that reaches
//!   them; only a link back to one of its own ancestors is skipped.

use super::notes_repo::{RepoError, RepoResult};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const NOTE_EXTENSION: &str = "md";

/// Which kind of entry a walk collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Collect `.md` files only.
    Notes,
    /// Collect directories only.
    Categories,
}

/// Walks `root` recursively and returns matching paths in traversal order.
///
/// Siblings are visited in file name order.
///
/// # Errors
/// - Returns `RepoError::Io` when a directory cannot be listed or an entry
///   cannot be inspected. Dangling symlinks and symlink loops are skipped.
pub fn walk(root: &Path, mode: WalkMode, pattern: Option<&str>) -> RepoResult<Vec<PathBuf>> {
    if !root.is_dir() {
        debug!(
            "event=walk module=repo status=skipped reason=root_missing root={}",
            root.display()
        );
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    let entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if skip_walk_error(&err) {
                    continue;
                }
                let path = err.path().unwrap_or(root).to_path_buf();
                return Err(RepoError::io(&path, io::Error::from(err)));
            }
        };

        let file_type = entry.file_type();
        let wanted = match mode {
            WalkMode::Notes => file_type.is_file() && is_note_file(entry.path()),
            WalkMode::Categories => file_type.is_dir(),
        };
        if wanted && matches_pattern(entry.path(), pattern) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

/// Returns whether `path` names a note file (`*.md`).
pub fn is_note_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == NOTE_EXTENSION)
}

fn matches_pattern(path: &Path, pattern: Option<&str>) -> bool {
    pattern.map_or(true, |pattern| path.to_string_lossy().contains(pattern))
}

fn skip_walk_error(err: &walkdir::Error) -> bool {
    if let Some(ancestor) = err.loop_ancestor() {
        debug!(
            "event=walk module=repo status=skipped reason=symlink_loop ancestor={}",
            ancestor.display()
        );
        return true;
    }
    let dangling = err
        .io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound);
    if dangling {
        debug!(
            "event=walk module=repo status=skipped reason=dangling_link path={}",
            err.path().unwrap_or(Path::new("")).display()
        );
    }
    dangling
}
