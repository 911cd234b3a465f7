//! Per-card todo lists.
//!
//! Each planning card owns at most three todo items. This module holds the
//! todo entity, the repository contract the todo service depends on, and the
//! service that enforces the capacity limit and existence checks. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
