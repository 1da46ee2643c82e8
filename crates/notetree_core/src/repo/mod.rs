//! Repository layer over the notes folder tree.
//!
//! # Responsibility
//! - Isolate directory walking and `stat`/`mkdir` calls from use-case code.
//! - Expose listings through the `NotesRepository` contract.
//!
//! # Invariants
//! - Repository reads never mutate the tree.
//! - Filesystem failures other than the handled category conflicts surface
//!   as `RepoError::Io` with the offending path.

pub mod notes_repo;
pub mod walker;
