//! Planning cards for the wedding planner.
//!
//! A card is a single planning item (venue booking, invitations, ...) that
//! moves through a small lifecycle and owns at most
//! [`domain::MAX_TODOS_PER_CARD`] todo items. The module follows hexagonal
//! architecture:
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
