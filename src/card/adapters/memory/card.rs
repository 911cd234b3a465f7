//! In-memory repository for planning cards.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::card::{
    domain::{Card, CardId, NewCard},
    ports::{CardRepository, CardRepositoryError, CardRepositoryResult},
};

/// Thread-safe in-memory card repository with monotonically assigned ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCardRepository {
    state: Arc<RwLock<InMemoryCardState>>,
}

#[derive(Debug, Default)]
struct InMemoryCardState {
    cards: BTreeMap<CardId, Card>,
    last_id: i32,
}

impl InMemoryCardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> CardRepositoryError {
    CardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn store(&self, card: &NewCard) -> CardRepositoryResult<Card> {
        let mut state = self.state.write().map_err(poisoned)?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| poisoned("card identifier space exhausted"))?;
        state.last_id = next;

        let stored = card.clone().into_card(CardId::new(next));
        state.cards.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, card: &Card) -> CardRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .cards
            .get_mut(&card.id())
            .ok_or(CardRepositoryError::NotFound(card.id()))?;
        *slot = card.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: CardId) -> CardRepositoryResult<Option<Card>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.cards.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: CardId) -> CardRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.cards.contains_key(&id))
    }

    async fn list_all(&self) -> CardRepositoryResult<Vec<Card>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.cards.values().cloned().collect())
    }

    async fn delete(&self, id: CardId) -> CardRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .cards
            .remove(&id)
            .map(|_| ())
            .ok_or(CardRepositoryError::NotFound(id))
    }
}
