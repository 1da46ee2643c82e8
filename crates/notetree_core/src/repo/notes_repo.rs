//! Notes repository contract and filesystem implementation.
//!
//! # Responsibility
//! - Turn raw walks into ordered category and note listings.
//! - Own category creation and its two handled conflict outcomes.
//!
//! # Invariants
//! - Categories are ordered by path string, ascending, with no limit.
//! - Notes are ordered by modification time, newest first, ties keep
//!   traversal order, and the result is truncated to the requested limit.
//! - Category creation makes at most one directory and never creates
//!   missing parents.

use super::walker::{walk, WalkMode};
use crate::config::NotesConfig;
use crate::model::entry::{Category, Note};
use log::{debug, info};
use std::cmp::Reverse;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

/// Result type used by notes repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from notes repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Filesystem failure while touching `path`.
    Io { path: PathBuf, source: io::Error },
    /// Category path is empty, absolute, or escapes the notes root.
    InvalidCategoryPath(String),
}

impl RepoError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::InvalidCategoryPath(value) => write!(
                f,
                "invalid category path `{value}`; expected a relative path like parent/new-category"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidCategoryPath(_) => None,
        }
    }
}

/// Outcome of a category creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryCreateOutcome {
    /// Directory was created at the contained path.
    Created(PathBuf),
    /// Something already exists at the contained path; nothing changed.
    AlreadyExists(PathBuf),
    /// Immediate parent of the contained path is missing; nothing changed.
    ParentMissing(PathBuf),
}

/// Finite, non-restartable sequence of notes, most recently modified first.
#[derive(Debug)]
pub struct NotesIter {
    inner: std::iter::Take<std::vec::IntoIter<Note>>,
}

impl Iterator for NotesIter {
    type Item = Note;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for NotesIter {}

/// Repository interface for notes tree listings and category writes.
pub trait NotesRepository {
    /// Notes root this repository reads from.
    fn root(&self) -> &Path;
    /// Lists every category below the root in path order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Lists up to `limit` notes matching `pattern`, newest first.
    fn list_notes(&self, limit: usize, pattern: Option<&str>) -> RepoResult<NotesIter>;
    /// Creates one category directory at `relative` below the root.
    fn create_category(&self, relative: &Path) -> RepoResult<CategoryCreateOutcome>;
}

/// Filesystem-backed notes repository.
#[derive(Debug, Clone)]
pub struct FsNotesRepository {
    root: PathBuf,
}

impl FsNotesRepository {
    /// Constructs a repository over the configured notes root.
    pub fn new(config: &NotesConfig) -> Self {
        Self {
            root: config.root.clone(),
        }
    }
}

impl NotesRepository for FsNotesRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let started_at = Instant::now();
        let mut paths = walk(&self.root, WalkMode::Categories, None)?;
        paths.sort_by_cached_key(|path| path.to_string_lossy().into_owned());

        debug!(
            "event=categories_list module=repo status=ok count={} duration_ms={}",
            paths.len(),
            started_at.elapsed().as_millis()
        );
        Ok(paths
            .into_iter()
            .map(|path| Category::new(&self.root, path))
            .collect())
    }

    fn list_notes(&self, limit: usize, pattern: Option<&str>) -> RepoResult<NotesIter> {
        let started_at = Instant::now();
        let paths = walk(&self.root, WalkMode::Notes, pattern)?;

        let mut notes = Vec::with_capacity(paths.len());
        for path in paths {
            let modified = fs::metadata(&path)
                .and_then(|metadata| metadata.modified())
                .map_err(|source| RepoError::io(&path, source))?;
            notes.push(Note::new(&self.root, path, modified));
        }
        // Stable sort: equal mtimes keep traversal order.
        notes.sort_by_key(|note| Reverse(note.modified));

        debug!(
            "event=notes_list module=repo status=ok matched={} limit={} pattern={} duration_ms={}",
            notes.len(),
            limit,
            pattern.is_some(),
            started_at.elapsed().as_millis()
        );
        Ok(NotesIter {
            inner: notes.into_iter().take(limit),
        })
    }

    fn create_category(&self, relative: &Path) -> RepoResult<CategoryCreateOutcome> {
        validate_category_path(relative)?;
        let target = self.root.join(relative);

        if target.exists() {
            info!(
                "event=category_create module=repo status=exists path={}",
                target.display()
            );
            return Ok(CategoryCreateOutcome::AlreadyExists(target));
        }

        match fs::create_dir(&target) {
            Ok(()) => {
                info!(
                    "event=category_create module=repo status=ok path={}",
                    target.display()
                );
                Ok(CategoryCreateOutcome::Created(target))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=category_create module=repo status=parent_missing path={}",
                    target.display()
                );
                Ok(CategoryCreateOutcome::ParentMissing(target))
            }
            Err(source) => Err(RepoError::io(&target, source)),
        }
    }
}

fn validate_category_path(relative: &Path) -> RepoResult<()> {
    let mut has_name = false;
    for component in relative.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(RepoError::InvalidCategoryPath(
                    relative.display().to_string(),
                ));
            }
        }
    }
    if !has_name {
        return Err(RepoError::InvalidCategoryPath(
            relative.display().to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_category_path, RepoError};
    use std::path::Path;

    #[test]
    fn validate_accepts_nested_relative_paths() {
        validate_category_path(Path::new("work")).unwrap();
        validate_category_path(Path::new("work/meetings")).unwrap();
        validate_category_path(Path::new("./work")).unwrap();
    }

    #[test]
    fn validate_rejects_escaping_or_empty_paths() {
        for value in ["", ".", "../outside", "work/../../x", "/abs"] {
            let err = validate_category_path(Path::new(value)).unwrap_err();
            assert!(
                matches!(err, RepoError::InvalidCategoryPath(_)),
                "`{value}` should be rejected"
            );
        }
    }
}
