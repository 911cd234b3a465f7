//! `PostgreSQL` adapters for card persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresCardRepository;
