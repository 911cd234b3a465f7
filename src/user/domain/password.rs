//! Raw passwords and their Argon2 hashes.

use super::UserDomainError;
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::fmt;
use thiserror::Error;

/// Plain-text password accepted at sign-up. Never persisted or printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 64;

    /// Creates a password that satisfies the length policy.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidPasswordLength`] outside 8 to 64
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(UserDomainError::InvalidPasswordLength);
        }
        Ok(Self(raw))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Hashing a password failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Argon2id hash in PHC string format; the salt and parameters travel inside
/// the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hashes a password under a freshly generated salt.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when Argon2 rejects its inputs.
    pub fn generate(password: &Password) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|err| PasswordHashError(err.to_string()))
    }

    /// Wraps a stored PHC string.
    #[must_use]
    pub fn from_phc(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the PHC string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks a candidate password; an unparsable stored hash never matches.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok()
        })
    }
}
