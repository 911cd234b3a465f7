//! Step definitions for todo capacity scenarios.

mod given;
mod then;
mod when;
pub mod world;
