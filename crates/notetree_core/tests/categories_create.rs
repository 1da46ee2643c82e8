use notetree_core::{
    CategoryCreateOutcome, FsNotesRepository, NoteService, NoteServiceError, NotesConfig,
    NotesRepository, RepoError, DISPLAY_LIMIT,
};
use std::fs;
use std::path::Path;

fn service_at(root: &Path) -> NoteService<FsNotesRepository> {
    NoteService::new(FsNotesRepository::new(&NotesConfig::new(root)), DISPLAY_LIMIT)
}

#[test]
fn create_category_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(dir.path());
    let target = dir.path().join("newcat");

    let first = service.create_category("newcat").unwrap();
    assert_eq!(first, CategoryCreateOutcome::Created(target.clone()));
    assert!(target.is_dir());

    let second = service.create_category("newcat").unwrap();
    assert_eq!(second, CategoryCreateOutcome::AlreadyExists(target));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn create_nested_category_under_existing_parent() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("work")).unwrap();
    let service = service_at(dir.path());

    let outcome = service.create_category(" work/meetings \n").unwrap();
    assert_eq!(
        outcome,
        CategoryCreateOutcome::Created(dir.path().join("work/meetings"))
    );
    assert!(dir.path().join("work/meetings").is_dir());
}

#[test]
fn missing_parent_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(dir.path());

    let outcome = service.create_category("parent/child").unwrap();
    assert_eq!(
        outcome,
        CategoryCreateOutcome::ParentMissing(dir.path().join("parent/child"))
    );
    assert!(!dir.path().join("parent").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn existing_file_counts_as_already_exists() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("taken"), "x").unwrap();
    let repo = FsNotesRepository::new(&NotesConfig::new(dir.path()));

    let outcome = repo.create_category(Path::new("taken")).unwrap();
    assert!(matches!(outcome, CategoryCreateOutcome::AlreadyExists(_)));
    assert!(dir.path().join("taken").is_file());
}

#[test]
fn absolute_or_escaping_paths_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(dir.path());

    for input in ["/tmp/elsewhere", "../sibling", ""] {
        let err = service.create_category(input).unwrap_err();
        assert!(
            matches!(
                err,
                NoteServiceError::Repo(RepoError::InvalidCategoryPath(_))
            ),
            "`{input}` should be rejected"
        );
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn created_category_shows_up_in_listing() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(dir.path());
    service.create_category("journal").unwrap();

    let categories = service.category_selection().unwrap();
    let lines: Vec<String> = categories.lines().collect();
    assert_eq!(lines, vec!["(0) journal"]);
}
