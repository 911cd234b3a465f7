//! Card aggregate root.

use super::{CardId, CardStatus, CardTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum number of todo items a single card can own.
pub const MAX_TODOS_PER_CARD: usize = 3;

/// Card that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    title: CardTitle,
    status: CardStatus,
    created_at: DateTime<Utc>,
}

impl NewCard {
    /// Creates a backlog card stamped with the current time.
    #[must_use]
    pub fn new(title: CardTitle, clock: &impl Clock) -> Self {
        Self {
            title,
            status: CardStatus::Backlog,
            created_at: clock.utc(),
        }
    }

    /// Returns the card title.
    #[must_use]
    pub const fn title(&self) -> &CardTitle {
        &self.title
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> CardStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_card(self, id: CardId) -> Card {
        Card {
            id,
            title: self.title,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Stored planning card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "cardId")]
    id: CardId,
    title: CardTitle,
    status: CardStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCardData {
    /// Persisted card identifier.
    pub id: CardId,
    /// Persisted title.
    pub title: CardTitle,
    /// Persisted lifecycle status.
    pub status: CardStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Reconstructs a card from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCardData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card title.
    #[must_use]
    pub const fn title(&self) -> &CardTitle {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> CardStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: CardTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Moves the card to another lifecycle status.
    pub fn change_status(&mut self, status: CardStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
