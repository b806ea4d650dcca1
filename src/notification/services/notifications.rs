//! Application service for the notification feed.

use crate::account::domain::UserId;
use crate::notification::{
    domain::{Notification, NotificationDomainError, NotificationDraft, NotificationId},
    ports::{NotificationRepository, NotificationRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;

/// Errors surfaced by the notification service.
#[derive(Debug, thiserror::Error)]
pub enum NotificationServiceError {
    /// A draft failed domain validation.
    #[error(transparent)]
    Domain(#[from] NotificationDomainError),
    /// The repository rejected the operation.
    #[error(transparent)]
    Repository(#[from] NotificationRepositoryError),
}

/// Result alias for notification service operations.
pub type NotificationServiceResult<T> = Result<T, NotificationServiceError>;

/// Service maintaining each user's notification feed.
///
/// Notifications are immutable once delivered apart from their read
/// flag, so the service offers no replace operation.
#[derive(Clone)]
pub struct NotificationService<R, C>
where
    R: NotificationRepository,
    C: Clock,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> NotificationService<R, C>
where
    R: NotificationRepository,
    C: Clock,
{
    /// Creates a new service over the given repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an unread notification from a draft and stores it.
    ///
    /// # Errors
    /// Returns an error if the draft fails validation or the store fails.
    pub async fn create(
        &self,
        draft: NotificationDraft,
    ) -> NotificationServiceResult<Notification> {
        let notification = Notification::new(draft, self.clock.as_ref())?;
        self.repository.store(&notification).await?;
        Ok(notification)
    }

    /// Looks up a notification by identifier.
    ///
    /// # Errors
    /// Returns an error if the lookup fails.
    pub async fn find_by_id(
        &self,
        id: NotificationId,
    ) -> NotificationServiceResult<Option<Notification>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists a user's notifications, oldest first.
    ///
    /// # Errors
    /// Returns an error if the listing fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> NotificationServiceResult<Vec<Notification>> {
        Ok(self.repository.list_for_user(user_id).await?)
    }

    /// Marks a notification as read and returns the updated record.
    ///
    /// Marking an already-read notification succeeds without change.
    ///
    /// # Errors
    /// Returns an error if the notification is missing or the update fails.
    pub async fn mark_read(&self, id: NotificationId) -> NotificationServiceResult<Notification> {
        let mut notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotificationRepositoryError::NotFound(id))?;
        notification.mark_read();
        self.repository.update(&notification).await?;
        Ok(notification)
    }

    /// Deletes a notification by identifier.
    ///
    /// # Errors
    /// Returns an error if the notification is missing or the delete fails.
    pub async fn delete(&self, id: NotificationId) -> NotificationServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
