//! Diesel row models for todo persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned todo identifier.
    pub todo_id: i32,
    /// Owning card.
    pub card_id: i32,
    /// Item text.
    pub item: String,
    /// Check status.
    pub check_status: String,
}

/// Insert model for todo records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Owning card.
    pub card_id: i32,
    /// Item text.
    pub item: String,
    /// Check status.
    pub check_status: String,
}
