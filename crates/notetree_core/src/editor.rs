//! External editor resolution and invocation.
//!
//! # Responsibility
//! - Pick the editor command from `NOTE_EDITOR`, then `EDITOR`, then `vim`.
//! - Run the editor on one path and block until it exits.
//!
//! # Invariants
//! - Blank environment values count as unset.
//! - A non-zero editor exit is logged, not raised.

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use std::process::Command;

/// Editor used when neither `NOTE_EDITOR` nor `EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vim";
/// Preferred editor environment variable.
pub const NOTE_EDITOR_ENV: &str = "NOTE_EDITOR";
/// Generic editor environment variable.
pub const EDITOR_ENV: &str = "EDITOR";

/// Something that can open a note path for editing.
pub trait Editor {
    /// Opens `path` and returns once editing is finished.
    fn edit(&self, path: &Path) -> Result<(), EditorError>;

    /// Warning to show before editing, if the editor choice is a fallback.
    fn fallback_warning(&self) -> Option<String> {
        None
    }
}

/// Errors from launching the editor.
#[derive(Debug)]
pub enum EditorError {
    /// Editor process could not be started.
    Spawn { program: String, source: io::Error },
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(f, "failed to launch editor `{program}`: {source}")
            }
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
        }
    }
}

/// Where the editor command came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSource {
    NoteEditor,
    Editor,
    Default,
}

/// Resolved editor program plus leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
    source: EditorSource,
}

impl EditorCommand {
    /// Resolves from the values of `NOTE_EDITOR` and `EDITOR`.
    ///
    /// The chosen value is split on whitespace: the first token is the
    /// program and the rest are passed before the note path.
    pub fn resolve(note_editor: Option<&str>, editor: Option<&str>) -> Self {
        let candidates = [
            (note_editor, EditorSource::NoteEditor),
            (editor, EditorSource::Editor),
        ];
        for (value, source) in candidates {
            let mut tokens = value.unwrap_or_default().split_whitespace();
            if let Some(program) = tokens.next() {
                return Self {
                    program: program.to_string(),
                    args: tokens.map(str::to_string).collect(),
                    source,
                };
            }
        }

        Self {
            program: DEFAULT_EDITOR.to_string(),
            args: Vec::new(),
            source: EditorSource::Default,
        }
    }

    /// Resolves from the process environment.
    pub fn from_env() -> Self {
        let note_editor = std::env::var(NOTE_EDITOR_ENV).ok();
        let editor = std::env::var(EDITOR_ENV).ok();
        Self::resolve(note_editor.as_deref(), editor.as_deref())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn source(&self) -> EditorSource {
        self.source
    }
}

impl Editor for EditorCommand {
    fn edit(&self, path: &Path) -> Result<(), EditorError> {
        info!(
            "event=editor_open module=editor status=start program={}",
            self.program
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            info!("event=editor_open module=editor status=ok");
        } else {
            warn!(
                "event=editor_open module=editor status=nonzero_exit code={:?}",
                status.code()
            );
        }
        Ok(())
    }

    fn fallback_warning(&self) -> Option<String> {
        match self.source {
            EditorSource::NoteEditor => None,
            EditorSource::Editor | EditorSource::Default => Some(format!(
                "Warning: environment variable {NOTE_EDITOR_ENV} not set, defaulting to {}",
                self.program
            )),
        }
    }
}
