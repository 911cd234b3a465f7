//! Read model returned to callers of the todo service.

use crate::card::domain::CardId;
use crate::todo::domain::{CheckStatus, Todo, TodoId};
use serde::{Deserialize, Serialize};

/// Serializable view of a stored todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    /// Todo identifier.
    pub todo_id: TodoId,
    /// Owning card.
    pub card_id: CardId,
    /// Item text.
    pub todo_item: String,
    /// Check status.
    pub check_status: CheckStatus,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            todo_id: todo.todo_id(),
            card_id: todo.card_id(),
            todo_item: todo.item().as_str().to_owned(),
            check_status: todo.check_status(),
        }
    }
}
