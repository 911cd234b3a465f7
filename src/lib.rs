//! Wedding planner backend.
//!
//! Couples organise their preparations as planning cards, each carrying at
//! most three todo items. The crate is split into bounded contexts that each
//! follow a hexagonal layout:
//!
//! - [`todo`]: per-card todo lists and the capacity rule
//! - [`card`]: planning cards and their lifecycle
//! - [`user`]: account sign-up and credential checks
//!
//! [`http`] exposes the services over a JSON API; [`config`] and
//! [`telemetry`] configure the server binary.

pub mod card;
pub mod config;
pub mod http;
pub mod persistence;
pub mod telemetry;
pub mod todo;
pub mod user;
