//! Port contracts for the goal module.

pub mod repository;

pub use repository::{GoalRepository, GoalRepositoryError, GoalRepositoryResult};
