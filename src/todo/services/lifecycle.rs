//! Service layer for the todo lifecycle: create, read, update, delete.

use super::{CreateTodoCommand, DeleteTodoCommand, ReadTodoCommand, TodoDto, UpdateTodoCommand};
use crate::card::domain::{CardId, MAX_TODOS_PER_CARD};
use crate::todo::{
    domain::{Todo, TodoDomainError, TodoErrorCode, TodoException, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// A todo rule was violated.
    #[error(transparent)]
    Todo(#[from] TodoException),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TodoRepositoryError),
}

impl TodoServiceError {
    /// Returns the rule-violation code, if this error is one.
    #[must_use]
    pub const fn code(&self) -> Option<TodoErrorCode> {
        match self {
            Self::Todo(exception) => Some(exception.code()),
            Self::Domain(_) | Self::Repository(_) => None,
        }
    }

    const fn rejected(code: TodoErrorCode) -> Self {
        Self::Todo(TodoException::new(code))
    }
}

impl From<TodoRepositoryError> for TodoServiceError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::CapacityExceeded(_) => {
                Self::rejected(TodoErrorCode::CapacityExceeded)
            }
            TodoRepositoryError::NotFound { .. } => Self::rejected(TodoErrorCode::NotFound),
            other => Self::Repository(other),
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo lifecycle orchestration service.
pub struct TodoService<R>
where
    R: TodoRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for TodoService<R>
where
    R: TodoRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository + ?Sized,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds a todo to a card that still has a free slot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Todo`] with
    /// [`TodoErrorCode::CapacityExceeded`] when the card already holds
    /// [`MAX_TODOS_PER_CARD`] todos, or [`TodoServiceError::Domain`] when the
    /// item text is invalid.
    #[tracing::instrument(skip(self, command), fields(card_id = %command.card_id()))]
    pub async fn create_todo(&self, command: CreateTodoCommand) -> TodoServiceResult<()> {
        let todo = command.to_entity()?;

        let count = self
            .repository
            .count_todo_by_card_id(command.card_id())
            .await?;
        if count >= MAX_TODOS_PER_CARD {
            tracing::warn!(count, "todo capacity exceeded");
            return Err(TodoServiceError::rejected(TodoErrorCode::CapacityExceeded));
        }

        self.repository.save(&todo).await?;
        tracing::info!("todo created");
        Ok(())
    }

    /// Fails unless the todo exists on the card.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Todo`] with [`TodoErrorCode::NotFound`]
    /// when the repository reports the todo absent.
    pub async fn check_todo_existence(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoServiceResult<()> {
        if self.repository.exists_by_todo_id(card_id, todo_id).await? {
            Ok(())
        } else {
            Err(TodoServiceError::rejected(TodoErrorCode::NotFound))
        }
    }

    /// Applies the fields present in the command and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TodoErrorCode::NotFound`] when the todo is absent, or
    /// [`TodoServiceError::Domain`] when a new item text is invalid.
    #[tracing::instrument(
        skip(self, command),
        fields(card_id = %command.card_id(), todo_id = %command.todo_id())
    )]
    pub async fn update_todo(&self, command: UpdateTodoCommand) -> TodoServiceResult<TodoDto> {
        let (card_id, todo_id, item, check_status) = command.into_parts();
        let new_item = item.map(TodoItem::new).transpose()?;

        self.check_todo_existence(card_id, todo_id).await?;
        let mut todo = self.load(card_id, todo_id).await?;

        if let Some(value) = new_item {
            todo.change_item(value);
        }
        if let Some(value) = check_status {
            todo.mark(value);
        }

        self.repository.update(&todo).await?;
        tracing::info!(check_status = todo.check_status().as_str(), "todo updated");
        Ok(TodoDto::from(&todo))
    }

    /// Removes a todo from its card.
    ///
    /// # Errors
    ///
    /// Returns [`TodoErrorCode::NotFound`] when the todo is absent.
    #[tracing::instrument(
        skip(self, command),
        fields(card_id = %command.card_id(), todo_id = %command.todo_id())
    )]
    pub async fn delete_todo(&self, command: DeleteTodoCommand) -> TodoServiceResult<()> {
        let (card_id, todo_id) = (command.card_id(), command.todo_id());
        self.check_todo_existence(card_id, todo_id).await?;
        self.repository.delete_todo(card_id, todo_id).await?;
        tracing::info!("todo deleted");
        Ok(())
    }

    /// Lists the card's todos in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoErrorCode::NotFound`] when the card has no todos.
    pub async fn get_all_todos(&self, card_id: CardId) -> TodoServiceResult<Vec<TodoDto>> {
        let todos = self.repository.get_all_todos(card_id).await?;
        if todos.is_empty() {
            return Err(TodoServiceError::rejected(TodoErrorCode::NotFound));
        }
        Ok(todos.iter().map(TodoDto::from).collect())
    }

    /// Drops every todo of a card that has just been deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_all_for_card(&self, card_id: CardId) -> TodoServiceResult<()> {
        self.repository.delete_all_for_card(card_id).await?;
        tracing::info!("card todos removed");
        Ok(())
    }

    /// Reads a single todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoErrorCode::NotFound`] when the todo is absent.
    pub async fn read_todo(&self, command: ReadTodoCommand) -> TodoServiceResult<TodoDto> {
        let (card_id, todo_id) = (command.card_id(), command.todo_id());
        self.check_todo_existence(card_id, todo_id).await?;
        let todo = self.load(card_id, todo_id).await?;
        Ok(TodoDto::from(&todo))
    }

    async fn load(&self, card_id: CardId, todo_id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_todo_id(card_id, todo_id)
            .await?
            .ok_or(TodoServiceError::rejected(TodoErrorCode::NotFound))
    }
}
