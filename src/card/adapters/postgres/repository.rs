//! `PostgreSQL` repository implementation for planning cards.

use super::{
    models::{CardRow, NewCardRow},
    schema::cards,
};
use crate::card::{
    domain::{Card, CardId, CardStatus, CardTitle, NewCard, PersistedCardData},
    ports::{CardRepository, CardRepositoryError, CardRepositoryResult},
};
use crate::persistence::{PgPool, get_conn_with, run_blocking_with};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed card repository.
#[derive(Debug, Clone)]
pub struct PostgresCardRepository {
    pool: PgPool,
}

impl PostgresCardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, CardRepositoryError::persistence)?;
                f(&mut connection)
            },
            CardRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl CardRepository for PostgresCardRepository {
    async fn store(&self, card: &NewCard) -> CardRepositoryResult<Card> {
        let new_row = NewCardRow {
            title: card.title().as_str().to_owned(),
            status: card.status().as_str().to_owned(),
            created_at: card.created_at(),
            updated_at: card.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(cards::table)
                .values(&new_row)
                .returning(CardRow::as_returning())
                .get_result::<CardRow>(connection)
                .map_err(CardRepositoryError::persistence)?;
            row_to_card(row)
        })
        .await
    }

    async fn update(&self, card: &Card) -> CardRepositoryResult<()> {
        let card_id = card.id();
        let title_val = card.title().as_str().to_owned();
        let status_val = card.status().as_str().to_owned();
        let updated_val = card.updated_at();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(cards::table.filter(cards::card_id.eq(card_id.value())))
                    .set((
                        cards::title.eq(&title_val),
                        cards::status.eq(&status_val),
                        cards::updated_at.eq(updated_val),
                    ))
                    .execute(connection)
                    .map_err(CardRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(CardRepositoryError::NotFound(card_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CardId) -> CardRepositoryResult<Option<Card>> {
        self.run_blocking(move |connection| {
            let row = cards::table
                .filter(cards::card_id.eq(id.value()))
                .select(CardRow::as_select())
                .first::<CardRow>(connection)
                .optional()
                .map_err(CardRepositoryError::persistence)?;
            row.map(row_to_card).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: CardId) -> CardRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                cards::table.filter(cards::card_id.eq(id.value())),
            ))
            .get_result::<bool>(connection)
            .map_err(CardRepositoryError::persistence)
        })
        .await
    }

    async fn list_all(&self) -> CardRepositoryResult<Vec<Card>> {
        self.run_blocking(move |connection| {
            let rows = cards::table
                .order(cards::card_id.asc())
                .select(CardRow::as_select())
                .load::<CardRow>(connection)
                .map_err(CardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_card).collect()
        })
        .await
    }

    async fn delete(&self, id: CardId) -> CardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(cards::table.filter(cards::card_id.eq(id.value())))
                .execute(connection)
                .map_err(CardRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(CardRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_card(row: CardRow) -> CardRepositoryResult<Card> {
    let CardRow {
        card_id,
        title,
        status,
        created_at,
        updated_at,
    } = row;

    let data = PersistedCardData {
        id: CardId::new(card_id),
        title: CardTitle::new(title).map_err(CardRepositoryError::persistence)?,
        status: CardStatus::try_from(status.as_str()).map_err(CardRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Card::from_persisted(data))
}
