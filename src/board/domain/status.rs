//! Task status enumeration and its column semantics.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseTaskStatusError;

/// Column a task occupies on the kanban board.
///
/// The status set is closed: every task is in exactly one of the three
/// columns, and the board projection derives entirely from this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Task has not been started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task is finished.
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Parses a status from storage, mapping unrecognised values to
    /// [`TaskStatus::Todo`].
    ///
    /// Stored rows predating the closed status set may carry free-form
    /// text. Such tasks surface in the todo column rather than vanishing
    /// from the board. Strict parsing lives in [`TryFrom`].
    #[must_use]
    pub fn from_persisted(value: &str) -> Self {
        Self::try_from(value).unwrap_or(Self::Todo)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
