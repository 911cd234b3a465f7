//! Validated card title.

use super::CardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, non-empty card title of at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardTitle(String);

impl CardTitle {
    const MAX_LENGTH: usize = 100;

    /// Creates a validated card title.
    ///
    /// # Errors
    ///
    /// Returns [`CardDomainError::EmptyTitle`] when the value is blank, or
    /// [`CardDomainError::TitleTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CardDomainError::EmptyTitle);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CardDomainError::TitleTooLong(length));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardTitle {
    type Error = CardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardTitle> for String {
    fn from(value: CardTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for CardTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CardTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
