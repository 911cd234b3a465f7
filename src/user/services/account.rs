//! Sign-up and login orchestration.

use crate::user::{
    domain::{Email, Nickname, Password, PasswordHashError, User, UserDomainError},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    email: String,
    nickname: String,
    password: String,
}

impl SignUpRequest {
    /// Creates a sign-up request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
            password: password.into(),
        }
    }
}

/// Request payload for checking credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// The email address is already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(Email),
    /// Unknown email or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The password could not be hashed.
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for AccountServiceError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateEmail(email) => Self::DuplicateEmail(email),
            other => Self::Repository(other),
        }
    }
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account orchestration service.
pub struct AccountService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for AccountService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> AccountService<R, C>
where
    R: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] for invalid input, or
    /// [`AccountServiceError::DuplicateEmail`] when the email is taken.
    #[tracing::instrument(skip_all)]
    pub async fn sign_up(&self, request: SignUpRequest) -> AccountServiceResult<User> {
        let SignUpRequest {
            email,
            nickname,
            password,
        } = request;

        let email_val = Email::new(email)?;
        let nickname_val = Nickname::new(nickname)?;
        let password_val = Password::new(password)?;

        if self.repository.exists_by_email(&email_val).await? {
            tracing::warn!("sign-up rejected: email already registered");
            return Err(AccountServiceError::DuplicateEmail(email_val));
        }

        let user = User::register(email_val, nickname_val, &password_val, &*self.clock)?;
        self.repository.store(&user).await?;
        tracing::info!(user_id = %user.id(), "user signed up");
        Ok(user)
    }

    /// Checks credentials and returns the matching account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::InvalidCredentials`] when the email is
    /// unknown or malformed, or the password does not match.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, request: LoginRequest) -> AccountServiceResult<User> {
        let Ok(email) = Email::new(request.email) else {
            return Err(AccountServiceError::InvalidCredentials);
        };

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .filter(|user| user.verify_password(&request.password))
            .ok_or(AccountServiceError::InvalidCredentials)?;

        tracing::info!(user_id = %user.id(), "user logged in");
        Ok(user)
    }
}
