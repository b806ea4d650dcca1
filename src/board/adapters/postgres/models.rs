//! Diesel row models for board persistence.

use super::schema::{categories, kanban_tasks};
use crate::account::domain::UserId;
use crate::board::{
    domain::{
        Category, CategoryId, CategoryName, HexColor, KanbanTask, OrderIndex,
        PersistedCategoryData, PersistedTaskData, Priority, TaskId, TaskStatus,
    },
    ports::{
        CategoryRepositoryError, CategoryRepositoryResult, TaskRepositoryError,
        TaskRepositoryResult,
    },
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for kanban task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = kanban_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Card title.
    pub title: String,
    /// Free-form card body.
    pub description: String,
    /// Task priority.
    pub priority: String,
    /// Board column the task occupies.
    pub status: String,
    /// Card colour.
    pub color: String,
    /// Owning category name.
    pub category: String,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Rank within the column.
    pub order_index: f64,
}

impl TaskRow {
    /// Maps a stored row back into the domain aggregate.
    ///
    /// Statuses are parsed leniently: rows predating the closed status set
    /// surface in the todo column. Priorities are parsed strictly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::InvalidPersistedData`] when the
    /// priority column holds an unknown value.
    pub fn into_task(self) -> TaskRepositoryResult<KanbanTask> {
        let priority = Priority::try_from(self.priority.as_str())
            .map_err(TaskRepositoryError::invalid_persisted_data)?;
        let status = TaskStatus::from_persisted(&self.status);

        Ok(KanbanTask::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            description: self.description,
            priority,
            status,
            color: self.color,
            category: self.category,
            deadline: self.deadline,
            created_at: self.created_at,
            order_index: OrderIndex::new(self.order_index),
        }))
    }
}

/// Insert model for kanban task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = kanban_tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Card title.
    pub title: String,
    /// Free-form card body.
    pub description: String,
    /// Task priority.
    pub priority: String,
    /// Board column the task occupies.
    pub status: String,
    /// Card colour.
    pub color: String,
    /// Owning category name.
    pub category: String,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Rank within the column.
    pub order_index: f64,
}

impl NewTaskRow {
    /// Builds an insert row from a domain task.
    #[must_use]
    pub fn from_task(task: &KanbanTask) -> Self {
        Self {
            id: task.id().into_inner(),
            user_id: task.user_id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            color: task.color().to_owned(),
            category: task.category().to_owned(),
            deadline: task.deadline(),
            created_at: task.created_at(),
            order_index: task.order_index().rank(),
        }
    }
}

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Category display name.
    pub name: String,
    /// Category hex colour.
    pub color: String,
}

impl CategoryRow {
    /// Maps a stored row back into the domain aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::InvalidPersistedData`] when the
    /// name or colour column fails domain validation.
    pub fn into_category(self) -> CategoryRepositoryResult<Category> {
        let name = CategoryName::new(self.name)
            .map_err(CategoryRepositoryError::invalid_persisted_data)?;
        let color =
            HexColor::new(self.color).map_err(CategoryRepositoryError::invalid_persisted_data)?;

        Ok(Category::from_persisted(PersistedCategoryData {
            id: CategoryId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            name,
            color,
        }))
    }
}

/// Insert model for category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Category display name.
    pub name: String,
    /// Category hex colour.
    pub color: String,
}

impl NewCategoryRow {
    /// Builds an insert row from a domain category.
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id().into_inner(),
            user_id: category.user_id().into_inner(),
            name: category.name().as_str().to_owned(),
            color: category.color().as_str().to_owned(),
        }
    }
}
