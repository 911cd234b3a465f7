//! Adapter implementations for card persistence.

pub mod memory;
pub mod postgres;
