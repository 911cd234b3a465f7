//! In-memory card adapters.

mod card;

pub use card::InMemoryCardRepository;
