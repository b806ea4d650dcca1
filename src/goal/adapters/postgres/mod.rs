//! `PostgreSQL`-backed adapters for goal persistence.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{GoalPgPool, PostgresGoalRepository};
