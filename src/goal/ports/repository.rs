//! Repository port for goal persistence.

use crate::account::domain::UserId;
use crate::goal::domain::{Goal, GoalId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for goal repository operations.
pub type GoalRepositoryResult<T> = Result<T, GoalRepositoryError>;

/// Goal persistence contract.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Stores a new goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::DuplicateGoal`] when the goal ID
    /// already exists.
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()>;

    /// Persists changes to an existing goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::NotFound`] when the goal does not
    /// exist.
    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()>;

    /// Finds a goal by identifier.
    ///
    /// Returns `None` when the goal does not exist.
    async fn find_by_id(&self, id: GoalId) -> GoalRepositoryResult<Option<Goal>>;

    /// Returns all goals owned by the given user, oldest first.
    async fn list_for_user(&self, user_id: UserId) -> GoalRepositoryResult<Vec<Goal>>;

    /// Deletes a goal.
    ///
    /// # Errors
    ///
    /// Returns [`GoalRepositoryError::NotFound`] when the goal does not
    /// exist.
    async fn delete(&self, id: GoalId) -> GoalRepositoryResult<()>;
}

/// Errors returned by goal repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GoalRepositoryError {
    /// A goal with the same identifier already exists.
    #[error("duplicate goal identifier: {0}")]
    DuplicateGoal(GoalId),

    /// The goal was not found.
    #[error("goal not found: {0}")]
    NotFound(GoalId),

    /// A stored row could not be mapped back into the domain.
    #[error("invalid persisted goal data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GoalRepositoryError {
    /// Wraps a row-mapping error.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
