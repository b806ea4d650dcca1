//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain validation, column projection,
//! the move apply state machine, the orchestration services, the mapping
//! between stored rows and domain aggregates, and the JSON wire shape.
