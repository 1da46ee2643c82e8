//! Numbered selection lists and choice resolution.
//!
//! # Invariants
//! - The index printed next to an item is its position in `items`, and
//!   `resolve` looks up that same position.
//! - Resolution never panics; bad input becomes a `SelectionError`.

use crate::model::entry::{Category, Note};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Item that can be shown in a numbered selection list.
pub trait SelectionItem {
    /// Text printed after the index.
    fn label(&self) -> Cow<'_, str>;
}

impl SelectionItem for Category {
    fn label(&self) -> Cow<'_, str> {
        self.relative.to_string_lossy()
    }
}

impl SelectionItem for Note {
    fn label(&self) -> Cow<'_, str> {
        self.relative.to_string_lossy()
    }
}

/// Errors from resolving a user's numeric choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Input is not a non-negative integer.
    NotANumber(String),
    /// Index is past the end of the list.
    OutOfRange { index: usize, len: usize },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "`{input}` is not a valid selection number"),
            Self::OutOfRange { index, len: 0 } => {
                write!(f, "selection {index} is out of range: nothing to select")
            }
            Self::OutOfRange { index, len } => write!(
                f,
                "selection {index} is out of range; expected 0..={}",
                len - 1
            ),
        }
    }
}

impl Error for SelectionError {}

/// Ordered, 0-indexed list presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList<T> {
    items: Vec<T>,
}

impl<T> SelectionList<T> {
    /// Wraps already ordered items.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Parses `input` as an index and returns the item at that position.
    pub fn resolve(&self, input: &str) -> Result<&T, SelectionError> {
        let trimmed = input.trim();
        let index = trimmed
            .parse::<usize>()
            .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
        self.items.get(index).ok_or(SelectionError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }
}

impl<T: SelectionItem> SelectionList<T> {
    /// Renders `(<index>) <label>` lines in list order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| format!("({index}) {}", item.label()))
    }
}

impl<T> FromIterator<T> for SelectionList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
