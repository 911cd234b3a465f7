//! Adapter implementations for user account persistence.

pub mod memory;
pub mod postgres;
