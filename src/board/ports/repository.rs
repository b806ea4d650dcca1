//! Repository ports for task and category persistence.

use crate::account::domain::UserId;
use crate::board::domain::{Category, CategoryId, KanbanTask, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Kanban task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &KanbanTask) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (content, column, rank).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &KanbanTask) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<KanbanTask>>;

    /// Returns all tasks owned by the given user.
    ///
    /// The order is deterministic: oldest first, so equal ranks project
    /// onto the board in creation order.
    async fn list_for_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<KanbanTask>>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Deletes every task of the user that carries the given category
    /// name, returning how many were removed.
    ///
    /// Removing zero tasks is not an error; a category may be empty.
    async fn delete_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A stored row could not be mapped back into the domain.
    #[error("invalid persisted task data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a row-mapping error.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::DuplicateCategory`] when the
    /// category ID already exists.
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Persists changes to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Returns all categories owned by the given user, ordered by name.
    async fn list_for_user(&self, user_id: UserId) -> CategoryRepositoryResult<Vec<Category>>;

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// A category with the same identifier already exists.
    #[error("duplicate category identifier: {0}")]
    DuplicateCategory(CategoryId),

    /// The category was not found.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// A stored row could not be mapped back into the domain.
    #[error("invalid persisted category data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a row-mapping error.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
