//! CLI error aggregation.

use notetree_core::{ConfigError, EditorError, NoteServiceError, SelectionError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Any failure that ends a command.
#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Service(NoteServiceError),
    Selection(SelectionError),
    Editor(EditorError),
    /// Standard input ended while a prompt was waiting.
    InputClosed,
    Io(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Selection(err) => write!(f, "{err}"),
            Self::Editor(err) => write!(f, "{err}"),
            Self::InputClosed => write!(f, "input closed before a response was entered"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::Selection(err) => Some(err),
            Self::Editor(err) => Some(err),
            Self::InputClosed => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<NoteServiceError> for CliError {
    fn from(value: NoteServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<SelectionError> for CliError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

impl From<EditorError> for CliError {
    fn from(value: EditorError) -> Self {
        Self::Editor(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
