//! Transient command objects carrying the inputs of one todo operation.

use crate::card::domain::CardId;
use crate::todo::domain::{CheckStatus, NewTodo, TodoDomainError, TodoId, TodoItem};

/// Command for adding a todo to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoCommand {
    card_id: CardId,
    item: String,
}

impl CreateTodoCommand {
    /// Creates a command for the given card and item text.
    #[must_use]
    pub fn new(card_id: CardId, item: impl Into<String>) -> Self {
        Self {
            card_id,
            item: item.into(),
        }
    }

    /// Returns the target card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the raw item text.
    #[must_use]
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Converts the command into an unsaved, unchecked todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError`] when the item text is invalid.
    pub fn to_entity(&self) -> Result<NewTodo, TodoDomainError> {
        let item = TodoItem::new(self.item.as_str())?;
        Ok(NewTodo::new(self.card_id, item))
    }
}

/// Command for a partial todo update. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoCommand {
    card_id: CardId,
    todo_id: TodoId,
    item: Option<String>,
    check_status: Option<CheckStatus>,
}

impl UpdateTodoCommand {
    /// Creates an update command.
    #[must_use]
    pub const fn new(
        card_id: CardId,
        todo_id: TodoId,
        item: Option<String>,
        check_status: Option<CheckStatus>,
    ) -> Self {
        Self {
            card_id,
            todo_id,
            item,
            check_status,
        }
    }

    /// Returns the target card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the target todo.
    #[must_use]
    pub const fn todo_id(&self) -> TodoId {
        self.todo_id
    }

    /// Returns the requested item text, if any.
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    /// Returns the requested check status, if any.
    #[must_use]
    pub const fn check_status(&self) -> Option<CheckStatus> {
        self.check_status
    }

    pub(super) fn into_parts(self) -> (CardId, TodoId, Option<String>, Option<CheckStatus>) {
        (self.card_id, self.todo_id, self.item, self.check_status)
    }
}

/// Command for removing a todo from a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTodoCommand {
    card_id: CardId,
    todo_id: TodoId,
}

impl DeleteTodoCommand {
    /// Creates a delete command.
    #[must_use]
    pub const fn new(card_id: CardId, todo_id: TodoId) -> Self {
        Self { card_id, todo_id }
    }

    /// Returns the owning card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the todo to delete.
    #[must_use]
    pub const fn todo_id(&self) -> TodoId {
        self.todo_id
    }
}

/// Command for reading a single todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTodoCommand {
    card_id: CardId,
    todo_id: TodoId,
}

impl ReadTodoCommand {
    /// Creates a read command.
    #[must_use]
    pub const fn new(card_id: CardId, todo_id: TodoId) -> Self {
        Self { card_id, todo_id }
    }

    /// Returns the owning card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the todo to read.
    #[must_use]
    pub const fn todo_id(&self) -> TodoId {
        self.todo_id
    }
}
