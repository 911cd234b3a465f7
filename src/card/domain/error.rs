//! Error types for card domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing card domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardDomainError {
    /// The card title is empty after trimming.
    #[error("card title must not be empty")]
    EmptyTitle,

    /// The card title exceeds the 100-character storage limit.
    #[error("card title exceeds 100 character limit ({0} characters)")]
    TitleTooLong(usize),
}

/// Error returned while parsing card status from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown card status: {0}")]
pub struct ParseCardStatusError(pub String);
