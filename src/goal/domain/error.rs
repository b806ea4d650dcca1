//! Error types for goal domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing goal domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoalDomainError {
    /// The goal title is empty after trimming.
    #[error("goal title must not be empty")]
    EmptyGoalTitle,
}

/// Error returned while parsing goal kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown goal kind: {0}")]
pub struct ParseGoalKindError(pub String);
