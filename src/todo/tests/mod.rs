//! Unit tests for the todo module.

mod service_tests;
