//! User account aggregate.

use super::{Email, Nickname, Password, PasswordDigest, PasswordHashError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Registered user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    nickname: Nickname,
    password: PasswordDigest,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted email address.
    pub email: Email,
    /// Persisted nickname.
    pub nickname: Nickname,
    /// Persisted password digest.
    pub password: PasswordDigest,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Registers a new account, hashing the password under a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the password cannot be hashed.
    pub fn register(
        email: Email,
        nickname: Nickname,
        password: &Password,
        clock: &impl Clock,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self {
            id: UserId::new(),
            email,
            nickname,
            password: PasswordDigest::generate(password)?,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            nickname: data.nickname,
            password: data.password,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the nickname.
    #[must_use]
    pub const fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password(&self) -> &PasswordDigest {
        &self.password
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks a login password.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }
}
