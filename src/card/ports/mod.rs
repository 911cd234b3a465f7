//! Port contracts for planning card persistence.

pub mod repository;

pub use repository::{CardRepository, CardRepositoryError, CardRepositoryResult};
