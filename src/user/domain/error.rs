//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The email address is not of the form `local@domain`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The email address exceeds the 255-character storage limit.
    #[error("email address exceeds 255 character limit")]
    EmailTooLong,

    /// The nickname is empty after trimming.
    #[error("nickname must not be empty")]
    EmptyNickname,

    /// The nickname exceeds 30 characters.
    #[error("nickname exceeds 30 character limit ({0} characters)")]
    NicknameTooLong(usize),

    /// The password is shorter than 8 or longer than 64 characters.
    #[error("password must be between 8 and 64 characters")]
    InvalidPasswordLength,
}
