//! Diesel row models for card persistence.

use super::schema::cards;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for card records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CardRow {
    /// Store-assigned card identifier.
    pub card_id: i32,
    /// Card title.
    pub title: String,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for card records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cards)]
pub struct NewCardRow {
    /// Card title.
    pub title: String,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
