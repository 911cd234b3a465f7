//! Checked state of a todo item.

use super::ParseCheckStatusError;
use serde::{Deserialize, Serialize};

/// Whether a todo item has been ticked off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// Still to do.
    #[default]
    Unchecked,
    /// Done.
    Checked,
}

impl CheckStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Checked => "checked",
        }
    }
}

impl TryFrom<&str> for CheckStatus {
    type Error = ParseCheckStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Ok(Self::Unchecked),
            "checked" => Ok(Self::Checked),
            _ => Err(ParseCheckStatusError(value.to_owned())),
        }
    }
}
