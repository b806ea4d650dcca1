//! Domain model for personal goals.

mod error;
mod goal;
mod ids;

pub use error::{GoalDomainError, ParseGoalKindError};
pub use goal::{Goal, GoalDraft, GoalKind, PersistedGoalData};
pub use ids::GoalId;
