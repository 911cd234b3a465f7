//! Domain model for planning cards.
//!
//! Cards carry a validated title and a lifecycle status. The todo capacity
//! limit is defined here because it is a property of the card, even though
//! the todo service is what enforces it.

mod card;
mod error;
mod ids;
mod status;
mod title;

pub use card::{Card, MAX_TODOS_PER_CARD, NewCard, PersistedCardData};
pub use error::{CardDomainError, ParseCardStatusError};
pub use ids::CardId;
pub use status::CardStatus;
pub use title::CardTitle;
