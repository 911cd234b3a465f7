//! Diesel row models for user account persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row shape shared by inserts and queries.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub nickname: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
