//! Core use-case services.
//!
//! # Responsibility
//! - Build numbered selection lists from repository listings.
//! - Resolve user choices and compose new note locations.
//! - Keep the CLI layer decoupled from filesystem details.

pub mod naming;
pub mod note_service;
pub mod selection;
