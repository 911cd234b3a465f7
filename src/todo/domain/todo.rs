//! Todo entity.

use super::{CheckStatus, TodoId, TodoItem};
use crate::card::domain::CardId;

/// Todo item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    card_id: CardId,
    item: TodoItem,
    check_status: CheckStatus,
}

impl NewTodo {
    /// Creates an unchecked todo for the given card.
    #[must_use]
    pub const fn new(card_id: CardId, item: TodoItem) -> Self {
        Self {
            card_id,
            item,
            check_status: CheckStatus::Unchecked,
        }
    }

    /// Returns the owning card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the item text.
    #[must_use]
    pub const fn item(&self) -> &TodoItem {
        &self.item
    }

    /// Returns the initial check status.
    #[must_use]
    pub const fn check_status(&self) -> CheckStatus {
        self.check_status
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_todo(self, todo_id: TodoId) -> Todo {
        Todo {
            todo_id,
            card_id: self.card_id,
            item: self.item,
            check_status: self.check_status,
        }
    }
}

/// Stored todo item. The owning card never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    todo_id: TodoId,
    card_id: CardId,
    item: TodoItem,
    check_status: CheckStatus,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub todo_id: TodoId,
    /// Owning card.
    pub card_id: CardId,
    /// Persisted item text.
    pub item: TodoItem,
    /// Persisted check status.
    pub check_status: CheckStatus,
}

impl Todo {
    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            todo_id: data.todo_id,
            card_id: data.card_id,
            item: data.item,
            check_status: data.check_status,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn todo_id(&self) -> TodoId {
        self.todo_id
    }

    /// Returns the owning card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the item text.
    #[must_use]
    pub const fn item(&self) -> &TodoItem {
        &self.item
    }

    /// Returns the check status.
    #[must_use]
    pub const fn check_status(&self) -> CheckStatus {
        self.check_status
    }

    /// Replaces the item text.
    pub fn change_item(&mut self, item: TodoItem) {
        self.item = item;
    }

    /// Sets the check status.
    pub const fn mark(&mut self, check_status: CheckStatus) {
        self.check_status = check_status;
    }
}
