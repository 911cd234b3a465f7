//! Card lifecycle status.

use super::ParseCardStatusError;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a planning card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    /// Card has been created but nobody is working on it.
    #[default]
    Backlog,
    /// Card is being worked on.
    InProgress,
    /// Card is finished.
    Done,
}

impl CardStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for CardStatus {
    type Error = ParseCardStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseCardStatusError(value.to_owned())),
        }
    }
}
