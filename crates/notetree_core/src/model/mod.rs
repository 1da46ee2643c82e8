//! Domain model for the notes tree.
//!
//! # Responsibility
//! - Define the read models produced by directory walks.
//! - Keep absolute and root-relative identities side by side.

pub mod entry;
