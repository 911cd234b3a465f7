//! Domain model for user accounts.

mod error;
mod ids;
mod password;
mod profile;
mod user;

pub use error::UserDomainError;
pub use ids::UserId;
pub use password::{Password, PasswordDigest, PasswordHashError};
pub use profile::{Email, Nickname};
pub use user::{PersistedUserData, User};
