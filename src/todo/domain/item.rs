//! Validated todo item text.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, non-empty todo description of at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoItem(String);

impl TodoItem {
    const MAX_LENGTH: usize = 255;

    /// Creates a validated todo item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyItem`] for blank input, or
    /// [`TodoDomainError::ItemTooLong`] beyond 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyItem);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TodoDomainError::ItemTooLong(length));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the item text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoItem {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoItem> for String {
    fn from(value: TodoItem) -> Self {
        value.0
    }
}

impl AsRef<str> for TodoItem {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
