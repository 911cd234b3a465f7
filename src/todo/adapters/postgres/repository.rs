//! `PostgreSQL` repository implementation for todo items.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::{cards, todos},
};
use crate::card::domain::{CardId, MAX_TODOS_PER_CARD};
use crate::persistence::{PgPool, get_conn_with, run_blocking_with};
use crate::todo::{
    domain::{CheckStatus, NewTodo, PersistedTodoData, Todo, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

/// Failure inside the capacity-checked insert transaction.
enum SaveError {
    CardFull,
    Database(DieselError),
}

impl From<DieselError> for SaveError {
    fn from(err: DieselError) -> Self {
        Self::Database(err)
    }
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, TodoRepositoryError::persistence)?;
                f(&mut connection)
            },
            TodoRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn count_todo_by_card_id(&self, card_id: CardId) -> TodoRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let count = todos::table
                .filter(todos::card_id.eq(card_id.value()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            usize::try_from(count).map_err(TodoRepositoryError::invalid_persisted_data)
        })
        .await
    }

    async fn exists_by_todo_id(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                todos::table
                    .filter(todos::card_id.eq(card_id.value()))
                    .filter(todos::todo_id.eq(todo_id.value())),
            ))
            .get_result::<bool>(connection)
            .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn find_by_todo_id(
        &self,
        card_id: CardId,
        todo_id: TodoId,
    ) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::card_id.eq(card_id.value()))
                .filter(todos::todo_id.eq(todo_id.value()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn save(&self, todo: &NewTodo) -> TodoRepositoryResult<()> {
        let card_id = todo.card_id();
        let new_row = NewTodoRow {
            card_id: card_id.value(),
            item: todo.item().as_str().to_owned(),
            check_status: todo.check_status().as_str().to_owned(),
        };
        let limit = i64::try_from(MAX_TODOS_PER_CARD).unwrap_or(i64::MAX);

        self.run_blocking(move |connection| {
            connection
                .transaction::<_, SaveError, _>(|tx| {
                    // Serializes concurrent inserts for the same card.
                    cards::table
                        .filter(cards::card_id.eq(new_row.card_id))
                        .select(cards::card_id)
                        .for_update()
                        .load::<i32>(tx)?;

                    let count = todos::table
                        .filter(todos::card_id.eq(new_row.card_id))
                        .count()
                        .get_result::<i64>(tx)?;
                    if count >= limit {
                        return Err(SaveError::CardFull);
                    }

                    diesel::insert_into(todos::table)
                        .values(&new_row)
                        .execute(tx)?;
                    Ok(())
                })
                .map_err(|err| match err {
                    SaveError::CardFull => TodoRepositoryError::CapacityExceeded(card_id),
                    SaveError::Database(source) => TodoRepositoryError::persistence(source),
                })
        })
        .await
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let card_id = todo.card_id();
        let todo_id = todo.todo_id();
        let item_val = todo.item().as_str().to_owned();
        let status_val = todo.check_status().as_str().to_owned();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                todos::table
                    .filter(todos::card_id.eq(card_id.value()))
                    .filter(todos::todo_id.eq(todo_id.value())),
            )
            .set((
                todos::item.eq(&item_val),
                todos::check_status.eq(&status_val),
            ))
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TodoRepositoryError::NotFound { card_id, todo_id });
            }
            Ok(())
        })
        .await
    }

    async fn delete_todo(&self, card_id: CardId, todo_id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(
                todos::table
                    .filter(todos::card_id.eq(card_id.value()))
                    .filter(todos::todo_id.eq(todo_id.value())),
            )
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn get_all_todos(&self, card_id: CardId) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .filter(todos::card_id.eq(card_id.value()))
                .order(todos::todo_id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn delete_all_for_card(&self, _card_id: CardId) -> TodoRepositoryResult<()> {
        // `todos.card_id` is declared ON DELETE CASCADE.
        Ok(())
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        todo_id,
        card_id,
        item,
        check_status,
    } = row;

    let data = PersistedTodoData {
        todo_id: TodoId::new(todo_id),
        card_id: CardId::new(card_id),
        item: TodoItem::new(item).map_err(TodoRepositoryError::invalid_persisted_data)?,
        check_status: CheckStatus::try_from(check_status.as_str())
            .map_err(TodoRepositoryError::invalid_persisted_data)?,
    };
    Ok(Todo::from_persisted(data))
}

#[cfg(test)]
mod tests {
    use super::{TodoRow, row_to_todo};
    use crate::card::domain::CardId;
    use crate::todo::{
        domain::{CheckStatus, TodoId},
        ports::TodoRepositoryError,
    };

    fn row(item: &str, check_status: &str) -> TodoRow {
        TodoRow {
            todo_id: 11,
            card_id: 4,
            item: item.to_owned(),
            check_status: check_status.to_owned(),
        }
    }

    #[test]
    fn row_converts_into_todo() {
        let todo = row_to_todo(row("Order flowers", "checked")).expect("row is valid");

        assert_eq!(todo.todo_id(), TodoId::new(11));
        assert_eq!(todo.card_id(), CardId::new(4));
        assert_eq!(todo.item().as_str(), "Order flowers");
        assert_eq!(todo.check_status(), CheckStatus::Checked);
    }

    #[test]
    fn unknown_check_status_is_invalid_persisted_data() {
        let result = row_to_todo(row("Order flowers", "maybe"));

        assert!(matches!(
            result,
            Err(TodoRepositoryError::InvalidPersistedData(_))
        ));
    }

    #[test]
    fn blank_item_is_invalid_persisted_data() {
        let result = row_to_todo(row("  ", "unchecked"));

        assert!(matches!(
            result,
            Err(TodoRepositoryError::InvalidPersistedData(_))
        ));
    }
}
