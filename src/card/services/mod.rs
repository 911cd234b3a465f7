//! Application services for planning cards.

mod lifecycle;

pub use lifecycle::{
    CardService, CardServiceError, CardServiceResult, CreateCardCommand, UpdateCardCommand,
};
