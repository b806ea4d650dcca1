//! Port contracts for the board module.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod repository;

pub use repository::{
    CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};
