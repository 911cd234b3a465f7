//! Service layer for planning card creation, lookup and maintenance.

use crate::card::{
    domain::{Card, CardDomainError, CardId, CardStatus, CardTitle, NewCard},
    ports::{CardRepository, CardRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Command for creating a new card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCardCommand {
    title: String,
}

impl CreateCardCommand {
    /// Creates a command with the requested title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Command for a partial card update. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCardCommand {
    card_id: CardId,
    title: Option<String>,
    status: Option<CardStatus>,
}

impl UpdateCardCommand {
    /// Creates an update command that changes nothing yet.
    #[must_use]
    pub const fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            title: None,
            status: None,
        }
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: CardStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for card operations.
#[derive(Debug, Error)]
pub enum CardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CardDomainError),
    /// The referenced card does not exist.
    #[error("card not found: {0}")]
    NotFound(CardId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(CardRepositoryError),
}

impl From<CardRepositoryError> for CardServiceError {
    fn from(err: CardRepositoryError) -> Self {
        match err {
            CardRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ CardRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for card service operations.
pub type CardServiceResult<T> = Result<T, CardServiceError>;

/// Planning card orchestration service.
pub struct CardService<R, C>
where
    R: CardRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for CardService<R, C>
where
    R: CardRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> CardService<R, C>
where
    R: CardRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new card service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a backlog card.
    ///
    /// # Errors
    ///
    /// Returns [`CardServiceError::Domain`] when the title is invalid, or
    /// [`CardServiceError::Repository`] when persistence fails.
    #[tracing::instrument(skip(self, command))]
    pub async fn create_card(&self, command: CreateCardCommand) -> CardServiceResult<Card> {
        let title = CardTitle::new(command.title)?;
        let card = self
            .repository
            .store(&NewCard::new(title, &*self.clock))
            .await?;
        tracing::info!(card_id = %card.id(), "card created");
        Ok(card)
    }

    /// Fails unless the card exists.
    ///
    /// # Errors
    ///
    /// Returns [`CardServiceError::NotFound`] when the card is absent.
    pub async fn check_card_existence(&self, card_id: CardId) -> CardServiceResult<()> {
        if self.repository.exists_by_id(card_id).await? {
            Ok(())
        } else {
            Err(CardServiceError::NotFound(card_id))
        }
    }

    /// Loads a single card.
    ///
    /// # Errors
    ///
    /// Returns [`CardServiceError::NotFound`] when the card is absent.
    pub async fn find_card(&self, card_id: CardId) -> CardServiceResult<Card> {
        self.repository
            .find_by_id(card_id)
            .await?
            .ok_or(CardServiceError::NotFound(card_id))
    }

    /// Returns every card ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardServiceError::Repository`] when persistence lookup fails.
    pub async fn list_cards(&self) -> CardServiceResult<Vec<Card>> {
        Ok(self.repository.list_all().await?)
    }

    /// Applies the fields present in the command to an existing card.
    ///
    /// # Errors
    ///
    /// Returns [`CardServiceError::NotFound`] when the card is absent, or
    /// [`CardServiceError::Domain`] when a new title is invalid.
    #[tracing::instrument(skip(self, command), fields(card_id = %command.card_id))]
    pub async fn update_card(&self, command: UpdateCardCommand) -> CardServiceResult<Card> {
        let UpdateCardCommand {
            card_id,
            title,
            status,
        } = command;

        let new_title = title.map(CardTitle::new).transpose()?;
        let mut card = self.find_card(card_id).await?;
        if let Some(value) = new_title {
            card.rename(value, &*self.clock);
        }
        if let Some(value) = status {
            card.change_status(value, &*self.clock);
        }
        self.repository.update(&card).await?;
        tracing::info!(status = card.status().as_str(), "card updated");
        Ok(card)
    }

    /// Deletes a card.
    ///
    /// # Errors
    ///
    /// Returns [`CardServiceError::NotFound`] when the card is absent.
    #[tracing::instrument(skip(self))]
    pub async fn delete_card(&self, card_id: CardId) -> CardServiceResult<()> {
        self.check_card_existence(card_id).await?;
        self.repository.delete(card_id).await?;
        tracing::info!("card deleted");
        Ok(())
    }
}
