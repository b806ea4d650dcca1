//! Service layer for user account CRUD and profile updates.

use crate::account::{
    domain::{AccountDomainError, User, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for editing profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    username: String,
    avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    /// Creates a profile update keeping the current avatar.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar_url: None,
        }
    }

    /// Sets a new avatar location.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

/// Service-level errors for user CRUD operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User account CRUD service.
#[derive(Clone)]
pub struct UserService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores an account from a draft.
    ///
    /// The draft carries an already-hashed credential; registration with
    /// hashing lives on the auth service.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] when draft validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, draft: UserDraft) -> UserServiceResult<User> {
        let user = User::new(draft, self.clock.as_ref())?;
        self.repository.store(&user).await?;
        Ok(user)
    }

    /// Finds a user by identifier.
    ///
    /// Returns `None` when no user matches.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> UserServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every stored user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the listing fails.
    pub async fn list_all(&self) -> UserServiceResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }

    /// Replaces the stored account wholesale.
    ///
    /// The identifier and registration time are preserved; every other
    /// field comes from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] when the user does not exist, draft
    /// validation fails, or the repository rejects the write.
    pub async fn replace(&self, id: UserId, draft: UserDraft) -> UserServiceResult<User> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::NotFound(id))?;
        let replacement = User::replacement(id, existing.created_at(), draft)?;
        self.repository.update(&replacement).await?;
        Ok(replacement)
    }

    /// Applies a profile edit to a stored account.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] when the user does not exist, the new
    /// username is blank, or the repository rejects the write.
    pub async fn update_profile(
        &self,
        id: UserId,
        request: UpdateProfileRequest,
    ) -> UserServiceResult<User> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::NotFound(id))?;
        user.update_profile(request.username, request.avatar_url)?;
        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the user does not
    /// exist or the delete fails.
    pub async fn delete(&self, id: UserId) -> UserServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
