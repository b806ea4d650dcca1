//! Service layer for kanban task CRUD.

use crate::account::domain::UserId;
use crate::board::{
    domain::{BoardDomainError, KanbanTask, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task CRUD operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Kanban task CRUD service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a task from a draft.
    ///
    /// Identity and creation time are assigned here; the draft supplies
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when draft validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, draft: TaskDraft) -> TaskServiceResult<KanbanTask> {
        let task = KanbanTask::new(draft, self.clock.as_ref())?;
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `None` when no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Option<KanbanTask>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns all tasks owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list_for_user(&self, user_id: UserId) -> TaskServiceResult<Vec<KanbanTask>> {
        Ok(self.repository.list_for_user(user_id).await?)
    }

    /// Replaces the stored task wholesale.
    ///
    /// The identifier and creation time of the stored task are preserved;
    /// every other field comes from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the task does not exist, draft
    /// validation fails, or the repository rejects the write.
    pub async fn replace(&self, id: TaskId, draft: TaskDraft) -> TaskServiceResult<KanbanTask> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        let replacement = KanbanTask::replacement(id, existing.created_at(), draft)?;
        self.repository.update(&replacement).await?;
        Ok(replacement)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not
    /// exist or the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
