//! Goal aggregate root and goal kind.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GoalDomainError, GoalId, ParseGoalKindError};
use crate::account::domain::UserId;

/// Default repetition cadence for new goals.
const DEFAULT_FREQUENCY: &str = "daily";

/// How a goal measures progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Done or not done.
    Boolean,
    /// Counts repetitions toward a target.
    Counter,
    /// Tracks a measured value toward a target.
    Value,
}

impl GoalKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Value => "value",
        }
    }
}

impl Default for GoalKind {
    fn default() -> Self {
        Self::Boolean
    }
}

impl TryFrom<&str> for GoalKind {
    type Error = ParseGoalKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "boolean" => Ok(Self::Boolean),
            "counter" => Ok(Self::Counter),
            "value" => Ok(Self::Value),
            _ => Err(ParseGoalKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal aggregate root.
///
/// Goals live outside the board: they track recurring or measured
/// intentions per user, and the summary module counts their completions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: GoalId,
    user_id: UserId,
    title: String,
    description: String,
    is_completed: bool,
    category: String,
    frequency: String,
    target_count: u32,
    current_count: u32,
    kind: GoalKind,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object describing the mutable content of a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    /// Owner of the goal.
    pub user_id: UserId,
    /// Goal title, validated on construction.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Whether the goal is complete.
    pub is_completed: bool,
    /// Name of the owning category, empty when uncategorised.
    pub category: String,
    /// Repetition cadence, free-form.
    pub frequency: String,
    /// Target number of repetitions or units.
    pub target_count: u32,
    /// Progress so far.
    pub current_count: u32,
    /// How progress is measured.
    pub kind: GoalKind,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
}

impl GoalDraft {
    /// Creates a draft with default content for the given owner and title.
    #[must_use]
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: String::new(),
            is_completed: false,
            category: String::new(),
            frequency: DEFAULT_FREQUENCY.to_owned(),
            target_count: 1,
            current_count: 0,
            kind: GoalKind::default(),
            deadline: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Sets the owning category name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the repetition cadence.
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Sets the target count.
    #[must_use]
    pub const fn with_target_count(mut self, target_count: u32) -> Self {
        self.target_count = target_count;
        self
    }

    /// Sets the progress count.
    #[must_use]
    pub const fn with_current_count(mut self, current_count: u32) -> Self {
        self.current_count = current_count;
        self
    }

    /// Sets the goal kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: GoalKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Parameter object for reconstructing a persisted goal aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGoalData {
    /// Persisted goal identifier.
    pub id: GoalId,
    /// Persisted owner identifier.
    pub user_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted category name.
    pub category: String,
    /// Persisted cadence.
    pub frequency: String,
    /// Persisted target count.
    pub target_count: u32,
    /// Persisted progress count.
    pub current_count: u32,
    /// Persisted goal kind.
    pub kind: GoalKind,
    /// Persisted due date, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Creates a new goal from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`GoalDomainError::EmptyGoalTitle`] if the title is blank
    /// after trimming.
    pub fn new(draft: GoalDraft, clock: &impl Clock) -> Result<Self, GoalDomainError> {
        Self::build(GoalId::new(), clock.utc(), draft)
    }

    /// Builds the replacement for an existing goal, keeping its identity
    /// and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`GoalDomainError::EmptyGoalTitle`] if the title is blank
    /// after trimming.
    pub fn replacement(
        id: GoalId,
        created_at: DateTime<Utc>,
        draft: GoalDraft,
    ) -> Result<Self, GoalDomainError> {
        Self::build(id, created_at, draft)
    }

    fn build(
        id: GoalId,
        created_at: DateTime<Utc>,
        draft: GoalDraft,
    ) -> Result<Self, GoalDomainError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(GoalDomainError::EmptyGoalTitle);
        }

        Ok(Self {
            id,
            user_id: draft.user_id,
            title: title.to_owned(),
            description: draft.description,
            is_completed: draft.is_completed,
            category: draft.category,
            frequency: draft.frequency,
            target_count: draft.target_count,
            current_count: draft.current_count,
            kind: draft.kind,
            deadline: draft.deadline,
            created_at,
        })
    }

    /// Reconstructs a goal from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedGoalData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            title: data.title,
            description: data.description,
            is_completed: data.is_completed,
            category: data.category,
            frequency: data.frequency,
            target_count: data.target_count,
            current_count: data.current_count,
            kind: data.kind,
            deadline: data.deadline,
            created_at: data.created_at,
        }
    }

    /// Returns the goal identifier.
    #[must_use]
    pub const fn id(&self) -> GoalId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the goal is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the owning category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the repetition cadence.
    #[must_use]
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// Returns the target count.
    #[must_use]
    pub const fn target_count(&self) -> u32 {
        self.target_count
    }

    /// Returns the progress count.
    #[must_use]
    pub const fn current_count(&self) -> u32 {
        self.current_count
    }

    /// Returns how progress is measured.
    #[must_use]
    pub const fn kind(&self) -> GoalKind {
        self.kind
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
