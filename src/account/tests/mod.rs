//! Unit tests for the account module.
//!
//! Tests cover domain validation, the auth workflow, and user CRUD.
