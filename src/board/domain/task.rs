//! Kanban task aggregate root.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{BoardDomainError, OrderIndex, Priority, TaskId, TaskStatus};
use crate::account::domain::UserId;

/// Default card colour assigned to tasks created without one.
const DEFAULT_TASK_COLOR: &str = "#FFCDD2";

/// Kanban task aggregate root.
///
/// A task belongs to one user, occupies one board column via its status,
/// and is ordered within that column by its rank. The category link is by
/// name, not identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanTask {
    id: TaskId,
    user_id: UserId,
    title: String,
    description: String,
    priority: Priority,
    status: TaskStatus,
    color: String,
    category: String,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    order_index: OrderIndex,
}

/// Parameter object describing the mutable content of a task.
///
/// Drafts carry everything a create or replace request supplies; identity
/// and creation time stay server-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Owner of the task.
    pub user_id: UserId,
    /// Card title, validated on construction.
    pub title: String,
    /// Free-form card body.
    pub description: String,
    /// Relative urgency.
    pub priority: Priority,
    /// Board column the task occupies.
    pub status: TaskStatus,
    /// Card colour as rendered by the client.
    pub color: String,
    /// Name of the owning category, empty when uncategorised.
    pub category: String,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
    /// Rank within the column.
    pub order_index: OrderIndex,
}

impl TaskDraft {
    /// Creates a draft with default content for the given owner and title.
    #[must_use]
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: TaskStatus::Todo,
            color: DEFAULT_TASK_COLOR.to_owned(),
            category: String::new(),
            deadline: None,
            order_index: OrderIndex::default(),
        }
    }

    /// Sets the card body.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the board column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the card colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the owning category name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the rank within the column.
    #[must_use]
    pub const fn with_order_index(mut self, order_index: OrderIndex) -> Self {
        self.order_index = order_index;
        self
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub user_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted body.
    pub description: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted board column.
    pub status: TaskStatus,
    /// Persisted card colour.
    pub color: String,
    /// Persisted category name.
    pub category: String,
    /// Persisted due date, if any.
    pub deadline: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted column rank.
    pub order_index: OrderIndex,
}

impl KanbanTask {
    /// Creates a new task from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] if the title is blank
    /// after trimming.
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        Self::build(TaskId::new(), clock.utc(), draft)
    }

    /// Builds the replacement for an existing task, keeping its identity
    /// and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] if the title is blank
    /// after trimming.
    pub fn replacement(
        id: TaskId,
        created_at: DateTime<Utc>,
        draft: TaskDraft,
    ) -> Result<Self, BoardDomainError> {
        Self::build(id, created_at, draft)
    }

    fn build(
        id: TaskId,
        created_at: DateTime<Utc>,
        draft: TaskDraft,
    ) -> Result<Self, BoardDomainError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }

        Ok(Self {
            id,
            user_id: draft.user_id,
            title: title.to_owned(),
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            color: draft.color,
            category: draft.category,
            deadline: draft.deadline,
            created_at,
            order_index: draft.order_index,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            color: data.color,
            category: data.category,
            deadline: data.deadline,
            created_at: data.created_at,
            order_index: data.order_index,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the card title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the card body.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the board column the task occupies.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the card colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the owning category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
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

    /// Returns the rank within the column.
    #[must_use]
    pub const fn order_index(&self) -> OrderIndex {
        self.order_index
    }

    /// Re-anchors the task to a column slot.
    ///
    /// Used by board moves when settling a column after a drag: the status
    /// names the column and the rank names the position within it.
    pub const fn place(&mut self, status: TaskStatus, order_index: OrderIndex) {
        self.status = status;
        self.order_index = order_index;
    }
}
