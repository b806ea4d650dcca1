//! In-memory adapter integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `account_tests`: Registration, login, and profile lifecycle
//! - `board_flow_tests`: Board projection and committed drag moves
//! - `cascade_tests`: Category deletion cascading to its tasks
//! - `crud_roundtrip_tests`: Goal and notification lifecycles
//! - `reorder_tests`: Same-column reordering and rollback on write failure
//! - `summary_tests`: Completion counts over service-written state

mod in_memory {
    pub mod helpers;

    mod account_tests;
    mod board_flow_tests;
    mod cascade_tests;
    mod crud_roundtrip_tests;
    mod reorder_tests;
    mod summary_tests;
}
