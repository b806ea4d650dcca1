//! Application service for goal CRUD.

use crate::account::domain::UserId;
use crate::goal::{
    domain::{Goal, GoalDomainError, GoalDraft, GoalId},
    ports::{GoalRepository, GoalRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;

/// Errors surfaced by the goal service.
#[derive(Debug, thiserror::Error)]
pub enum GoalServiceError {
    /// A draft failed domain validation.
    #[error(transparent)]
    Domain(#[from] GoalDomainError),
    /// The repository rejected the operation.
    #[error(transparent)]
    Repository(#[from] GoalRepositoryError),
}

/// Result alias for goal service operations.
pub type GoalServiceResult<T> = Result<T, GoalServiceError>;

/// Service coordinating goal creation and upkeep.
#[derive(Clone)]
pub struct GoalService<R, C>
where
    R: GoalRepository,
    C: Clock,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> GoalService<R, C>
where
    R: GoalRepository,
    C: Clock,
{
    /// Creates a new service over the given repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a goal from a draft and stores it.
    ///
    /// # Errors
    /// Returns an error if the draft fails validation or the store fails.
    pub async fn create(&self, draft: GoalDraft) -> GoalServiceResult<Goal> {
        let goal = Goal::new(draft, self.clock.as_ref())?;
        self.repository.store(&goal).await?;
        Ok(goal)
    }

    /// Looks up a goal by identifier.
    ///
    /// # Errors
    /// Returns an error if the lookup fails.
    pub async fn find_by_id(&self, id: GoalId) -> GoalServiceResult<Option<Goal>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists a user's goals, oldest first.
    ///
    /// # Errors
    /// Returns an error if the listing fails.
    pub async fn list_for_user(&self, user_id: UserId) -> GoalServiceResult<Vec<Goal>> {
        Ok(self.repository.list_for_user(user_id).await?)
    }

    /// Replaces a stored goal with a fresh draft, keeping its identity.
    ///
    /// # Errors
    /// Returns an error if the goal is missing, the draft fails
    /// validation, or the update fails.
    pub async fn replace(&self, id: GoalId, draft: GoalDraft) -> GoalServiceResult<Goal> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(GoalRepositoryError::NotFound(id))?;
        let replacement = Goal::replacement(id, existing.created_at(), draft)?;
        self.repository.update(&replacement).await?;
        Ok(replacement)
    }

    /// Deletes a goal by identifier.
    ///
    /// # Errors
    /// Returns an error if the goal is missing or the delete fails.
    pub async fn delete(&self, id: GoalId) -> GoalServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
