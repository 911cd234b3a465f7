//! Repository port for planning card persistence.

use crate::card::domain::{Card, CardId, NewCard};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for card repository operations.
pub type CardRepositoryResult<T> = Result<T, CardRepositoryError>;

/// Card persistence contract.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Stores a new card and returns it with its assigned identifier.
    async fn store(&self, card: &NewCard) -> CardRepositoryResult<Card>;

    /// Persists title, status and timestamp changes of an existing card.
    ///
    /// # Errors
    ///
    /// Returns [`CardRepositoryError::NotFound`] when the card does not exist.
    async fn update(&self, card: &Card) -> CardRepositoryResult<()>;

    /// Finds a card by identifier.
    ///
    /// Returns `None` when the card does not exist.
    async fn find_by_id(&self, id: CardId) -> CardRepositoryResult<Option<Card>>;

    /// Reports whether a card with the given identifier exists.
    async fn exists_by_id(&self, id: CardId) -> CardRepositoryResult<bool>;

    /// Returns all cards ordered by ascending identifier.
    async fn list_all(&self) -> CardRepositoryResult<Vec<Card>>;

    /// Deletes a card.
    ///
    /// # Errors
    ///
    /// Returns [`CardRepositoryError::NotFound`] when the card does not exist.
    async fn delete(&self, id: CardId) -> CardRepositoryResult<()>;
}

/// Errors returned by card repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CardRepositoryError {
    /// The card was not found.
    #[error("card not found: {0}")]
    NotFound(CardId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
