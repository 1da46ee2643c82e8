//! Note use-case service.
//!
//! # Responsibility
//! - Produce category and note selection lists for the CLI.
//! - Create categories from user-typed `parent/child` paths.
//! - Compose the location of a new note inside a chosen category.
//!
//! # Invariants
//! - Note selections are bounded by the configured display limit.
//! - A selection list is computed once per command; choices resolve against
//!   that exact list.

use super::naming::note_file_name;
use super::selection::SelectionList;
use crate::model::entry::{Category, Note};
use crate::repo::notes_repo::{CategoryCreateOutcome, NotesRepository, RepoError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Repository-level failure, including rejected category paths.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NotesRepository> {
    repo: R,
    display_limit: usize,
}

impl<R: NotesRepository> NoteService<R> {
    /// Creates a service showing at most `display_limit` notes per listing.
    pub fn new(repo: R, display_limit: usize) -> Self {
        Self {
            repo,
            display_limit,
        }
    }

    /// Notes root served by the underlying repository.
    pub fn root(&self) -> &Path {
        self.repo.root()
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Lists every category in path order.
    pub fn category_selection(&self) -> Result<SelectionList<Category>, NoteServiceError> {
        Ok(SelectionList::new(self.repo.list_categories()?))
    }

    /// Lists the most recently modified notes matching `pattern`.
    pub fn note_selection(
        &self,
        pattern: Option<&str>,
    ) -> Result<SelectionList<Note>, NoteServiceError> {
        let notes = self.repo.list_notes(self.display_limit, pattern)?;
        Ok(notes.collect())
    }

    /// Creates one category from user input such as `parent/child`.
    ///
    /// Surrounding whitespace is ignored. Conflicts are returned as outcomes,
    /// not errors.
    pub fn create_category(
        &self,
        input: &str,
    ) -> Result<CategoryCreateOutcome, NoteServiceError> {
        let relative = input.trim();
        Ok(self.repo.create_category(Path::new(relative))?)
    }

    /// Location of a new note in `category` named after `date` and
    /// `description`. Nothing is written.
    pub fn new_note_path(
        &self,
        category: &Category,
        description: &str,
        date: NaiveDate,
    ) -> PathBuf {
        category.path.join(note_file_name(date, description))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteService, NoteServiceError};
    use crate::config::NotesConfig;
    use crate::model::entry::Category;
    use crate::repo::notes_repo::{FsNotesRepository, RepoError};
    use chrono::NaiveDate;

    #[test]
    fn new_note_path_joins_category_and_file_name() {
        let config = NotesConfig::new("/notes");
        let service = NoteService::new(FsNotesRepository::new(&config), config.display_limit);
        let category = Category::new(&config.root, "/notes/work".into());
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

        let path = service.new_note_path(&category, "sprint review", date);
        assert_eq!(path, std::path::PathBuf::from("/notes/work/251201-sprint-review.md"));
    }

    #[test]
    fn invalid_category_input_is_a_wrapped_repo_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = NotesConfig::new(dir.path());
        let service = NoteService::new(FsNotesRepository::new(&config), config.display_limit);

        let err = service.create_category("../escape").unwrap_err();
        assert!(matches!(
            err,
            NoteServiceError::Repo(RepoError::InvalidCategoryPath(_))
        ));
        assert!(err.to_string().contains("parent/new-category"));
        assert!(!dir.path().parent().unwrap().join("escape").exists());
    }
}
