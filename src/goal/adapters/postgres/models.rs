//! Diesel row models for goal persistence.

use super::schema::goals;
use crate::account::domain::UserId;
use crate::goal::{
    domain::{Goal, GoalId, GoalKind, PersistedGoalData},
    ports::{GoalRepositoryError, GoalRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for goal records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GoalRow {
    /// Goal identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Goal title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Owning category name.
    pub category: String,
    /// Repetition cadence.
    pub frequency: String,
    /// Target count.
    pub target_count: i32,
    /// Progress count.
    pub current_count: i32,
    /// How progress is measured.
    pub kind: String,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl GoalRow {
    /// Maps a stored row back into the domain aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::InvalidPersistedData`] when the kind
    /// column holds an unknown value or either count is negative.
    pub fn into_goal(self) -> GoalRepositoryResult<Goal> {
        let kind = GoalKind::try_from(self.kind.as_str())
            .map_err(GoalRepositoryError::invalid_persisted_data)?;
        let target_count = u32::try_from(self.target_count)
            .map_err(GoalRepositoryError::invalid_persisted_data)?;
        let current_count = u32::try_from(self.current_count)
            .map_err(GoalRepositoryError::invalid_persisted_data)?;

        Ok(Goal::from_persisted(PersistedGoalData {
            id: GoalId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            category: self.category,
            frequency: self.frequency,
            target_count,
            current_count,
            kind,
            deadline: self.deadline,
            created_at: self.created_at,
        }))
    }
}

/// Insert model for goal records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = goals)]
pub struct NewGoalRow {
    /// Goal identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Goal title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Owning category name.
    pub category: String,
    /// Repetition cadence.
    pub frequency: String,
    /// Target count.
    pub target_count: i32,
    /// Progress count.
    pub current_count: i32,
    /// How progress is measured.
    pub kind: String,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewGoalRow {
    /// Builds an insert row from a domain goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::Persistence`] when a count exceeds
    /// the signed column range.
    pub fn try_from_goal(goal: &Goal) -> GoalRepositoryResult<Self> {
        let target_count =
            i32::try_from(goal.target_count()).map_err(GoalRepositoryError::persistence)?;
        let current_count =
            i32::try_from(goal.current_count()).map_err(GoalRepositoryError::persistence)?;

        Ok(Self {
            id: goal.id().into_inner(),
            user_id: goal.user_id().into_inner(),
            title: goal.title().to_owned(),
            description: goal.description().to_owned(),
            is_completed: goal.is_completed(),
            category: goal.category().to_owned(),
            frequency: goal.frequency().to_owned(),
            target_count,
            current_count,
            kind: goal.kind().as_str().to_owned(),
            deadline: goal.deadline(),
            created_at: goal.created_at(),
        })
    }
}
