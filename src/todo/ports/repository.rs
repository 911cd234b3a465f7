//! Repository port for todo persistence.

use crate::card::domain::CardId;
use crate::todo::domain::{NewTodo, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Todos are always addressed by `(card_id, todo_id)`; a todo id that
/// belongs to another card is treated as absent.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns how many todos the card currently owns.
    async fn count_todo_by_card_id(&self, card_id: CardId) -> TodoRepositoryResult<usize>;

    /// Reports whether the todo exists on the card.
    async fn exists_by_todo_id(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoRepositoryResult<bool>;

    /// Loads a todo.
    ///
    /// Returns `None` when the todo does not exist on the card.
    async fn find_by_todo_id(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoRepositoryResult<Option<Todo>>;

    /// Stores a new todo, assigning its identifier.
    ///
    /// Implementations recount the card's todos atomically with the insert.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::CapacityExceeded`] when the card is
    /// already full at write time.
    async fn save(&self, todo: &NewTodo) -> TodoRepositoryResult<()>;

    /// Persists item and check status changes of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Deletes a todo. Deleting an absent todo is a no-op.
    async fn delete_todo(&self, card_id: CardId, todo_id: TodoId) -> TodoRepositoryResult<()>;

    /// Returns the card's todos ordered by ascending identifier.
    async fn get_all_todos(&self, card_id: CardId) -> TodoRepositoryResult<Vec<Todo>>;

    /// Removes every todo owned by a deleted card.
    ///
    /// Stores whose schema already cascades card deletes may treat this as
    /// a no-op.
    async fn delete_all_for_card(&self, card_id: CardId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The card already holds the maximum number of todos.
    #[error("card {0} already holds the maximum number of todos")]
    CapacityExceeded(CardId),

    /// The todo was not found on the card.
    #[error("todo {todo_id} not found on card {card_id}")]
    NotFound {
        /// Owning card.
        card_id: CardId,
        /// Missing todo.
        todo_id: TodoId,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
