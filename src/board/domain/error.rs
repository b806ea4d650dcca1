//! Error types for board domain validation and parsing.

use thiserror::Error;

use super::{ApplyPhase, TaskId, TaskStatus};

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The category name exceeds the persisted column width.
    #[error("category name of {0} characters exceeds the maximum of 50")]
    CategoryNameTooLong(usize),

    /// The colour value is not a `#RGB` or `#RRGGBB` hex triplet.
    #[error("invalid hex colour '{0}', expected #RGB or #RRGGBB")]
    InvalidHexColor(String),

    /// A move apply was driven out of order.
    #[error("cannot move board apply from {from} to {to}")]
    InvalidPhaseTransition {
        /// Phase the apply was in when the transition was requested.
        from: ApplyPhase,
        /// Phase the transition attempted to reach.
        to: ApplyPhase,
    },

    /// The client's view of the board no longer matches the stored board.
    #[error("task {task_id} is not at index {index} of the {status} column")]
    StaleBoardView {
        /// Task the client believed occupied the source slot.
        task_id: TaskId,
        /// Column named by the source reference.
        status: TaskStatus,
        /// Position named by the source reference.
        index: usize,
    },
}

/// Error returned while strictly parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
