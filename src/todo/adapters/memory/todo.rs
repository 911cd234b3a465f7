//! In-memory repository for todo items.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::card::domain::{CardId, MAX_TODOS_PER_CARD};
use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are assigned from a single counter shared by all cards, so
/// iteration order equals insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i32,
}

impl InMemoryTodoState {
    fn on_card(&self, card_id: CardId) -> impl Iterator<Item = &Todo> {
        self.todos
            .values()
            .filter(move |todo| todo.card_id() == card_id)
    }

    fn get(&self, card_id: CardId, todo_id: TodoId) -> Option<&Todo> {
        self.todos
            .get(&todo_id)
            .filter(|todo| todo.card_id() == card_id)
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn count_todo_by_card_id(&self, card_id: CardId) -> TodoRepositoryResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.on_card(card_id).count())
    }

    async fn exists_by_todo_id(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(card_id, todo_id).is_some())
    }

    async fn find_by_todo_id(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(card_id, todo_id).cloned())
    }

    async fn save(&self, todo: &NewTodo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;

        if state.on_card(todo.card_id()).count() >= MAX_TODOS_PER_CARD {
            return Err(TodoRepositoryError::CapacityExceeded(todo.card_id()));
        }

        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| poisoned("todo identifier space exhausted"))?;
        state.last_id = next;

        let stored = todo.clone().into_todo(TodoId::new(next));
        state.todos.insert(stored.todo_id(), stored);
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .todos
            .get_mut(&todo.todo_id())
            .filter(|existing| existing.card_id() == todo.card_id())
            .ok_or(TodoRepositoryError::NotFound {
                card_id: todo.card_id(),
                todo_id: todo.todo_id(),
            })?;
        *slot = todo.clone();
        Ok(())
    }

    async fn delete_todo(&self, card_id: CardId, todo_id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.get(card_id, todo_id).is_some() {
            state.todos.remove(&todo_id);
        }
        Ok(())
    }

    async fn get_all_todos(&self, card_id: CardId) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.on_card(card_id).cloned().collect())
    }

    async fn delete_all_for_card(&self, card_id: CardId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.todos.retain(|_, todo| todo.card_id() != card_id);
        Ok(())
    }
}
