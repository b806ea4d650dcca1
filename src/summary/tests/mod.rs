//! Unit tests for the summary module.
