//! Error types for the todo domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing todo domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo item is empty after trimming.
    #[error("todo item must not be empty")]
    EmptyItem,

    /// The todo item exceeds the 255-character storage limit.
    #[error("todo item exceeds 255 character limit ({0} characters)")]
    ItemTooLong(usize),
}

/// Error returned while parsing a check status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown check status: {0}")]
pub struct ParseCheckStatusError(pub String);

/// Reason a todo operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoErrorCode {
    /// The card already holds the maximum number of todos.
    CapacityExceeded,
    /// The requested todo does not exist on the card.
    NotFound,
}

impl TodoErrorCode {
    /// Returns the wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CapacityExceeded => "CAPACITY_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
        }
    }

    /// Returns the human readable message for the code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::CapacityExceeded => "a card can hold at most 3 todos",
            Self::NotFound => "todo not found",
        }
    }
}

impl fmt::Display for TodoErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule violation raised by the todo service.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{code}: {}", .code.message())]
pub struct TodoException {
    code: TodoErrorCode,
}

impl TodoException {
    /// Creates an exception carrying the given reason code.
    #[must_use]
    pub const fn new(code: TodoErrorCode) -> Self {
        Self { code }
    }

    /// Returns the reason code.
    #[must_use]
    pub const fn code(&self) -> TodoErrorCode {
        self.code
    }
}

impl From<TodoErrorCode> for TodoException {
    fn from(code: TodoErrorCode) -> Self {
        Self::new(code)
    }
}
