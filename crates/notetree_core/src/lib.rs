//! Core domain logic for notetree.
//! This crate owns note discovery, ranking and category management over a
//! plain Markdown folder tree.

pub mod config;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, NotesConfig, DISPLAY_LIMIT};
pub use editor::{Editor, EditorCommand, EditorError, EditorSource, DEFAULT_EDITOR};
pub use logging::{default_log_dir, default_log_level, init_logging};
pub use model::entry::{Category, Note};
pub use repo::notes_repo::{
    CategoryCreateOutcome, FsNotesRepository, NotesIter, NotesRepository, RepoError, RepoResult,
};
pub use repo::walker::{walk, WalkMode};
pub use service::naming::note_file_name;
pub use service::note_service::{NoteService, NoteServiceError};
pub use service::selection::{SelectionError, SelectionItem, SelectionList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
