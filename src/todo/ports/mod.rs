//! Port contracts for todo persistence.
//!
//! The todo service depends only on [`TodoRepository`]; adapters supply the
//! storage.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
