//! In-memory notification repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::notification::{
    domain::{Notification, NotificationId},
    ports::{NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult},
};

/// Thread-safe in-memory notification repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    state: Arc<RwLock<InMemoryNotificationState>>,
}

#[derive(Debug, Default)]
struct InMemoryNotificationState {
    notifications: HashMap<NotificationId, Notification>,
    user_index: HashMap<UserId, Vec<NotificationId>>,
}

impl InMemoryNotificationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn store(&self, notification: &Notification) -> NotificationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.notifications.contains_key(&notification.id()) {
            return Err(NotificationRepositoryError::DuplicateNotification(
                notification.id(),
            ));
        }

        state
            .user_index
            .entry(notification.user_id())
            .or_default()
            .push(notification.id());
        state
            .notifications
            .insert(notification.id(), notification.clone());
        Ok(())
    }

    async fn update(&self, notification: &Notification) -> NotificationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.notifications.contains_key(&notification.id()) {
            return Err(NotificationRepositoryError::NotFound(notification.id()));
        }
        state
            .notifications
            .insert(notification.id(), notification.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: NotificationId,
    ) -> NotificationRepositoryResult<Option<Notification>> {
        let state = self.state.read().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.notifications.get(&id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> NotificationRepositoryResult<Vec<Notification>> {
        let state = self.state.read().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let notifications = state
            .user_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.notifications.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(notifications)
    }

    async fn delete(&self, id: NotificationId) -> NotificationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let notification = state
            .notifications
            .remove(&id)
            .ok_or(NotificationRepositoryError::NotFound(id))?;
        if let Some(ids) = state.user_index.get_mut(&notification.user_id()) {
            ids.retain(|candidate| *candidate != id);
            if ids.is_empty() {
                state.user_index.remove(&notification.user_id());
            }
        }
        Ok(())
    }
}
