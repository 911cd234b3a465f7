//! Unit tests for the card module.
