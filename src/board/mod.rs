//! Kanban board management.
//!
//! This module covers the board surface of the tracker: per-user tasks and
//! categories, the projection of tasks into the three status columns, drag
//! moves with their two-phase optimistic apply, and the category delete
//! cascade. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
