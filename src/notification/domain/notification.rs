//! Notification aggregate root.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{NotificationDomainError, NotificationId};
use crate::account::domain::UserId;

/// Kind assigned to notifications that do not declare one.
const DEFAULT_KIND: &str = "reminder";

/// Notification aggregate root.
///
/// A notification is a short message addressed to one user. It starts
/// unread and stays in the user's feed until deleted; marking it read is
/// the only mutation it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    id: NotificationId,
    user_id: UserId,
    message: String,
    kind: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object describing the content of a new notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    /// Recipient of the notification.
    pub user_id: UserId,
    /// Message shown to the user, validated on construction.
    pub message: String,
    /// Free-form kind label, for example `"reminder"` or `"deadline"`.
    pub kind: String,
}

impl NotificationDraft {
    /// Creates a draft with the default kind for the given recipient.
    #[must_use]
    pub fn new(user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
            kind: DEFAULT_KIND.to_owned(),
        }
    }

    /// Sets the kind label.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

/// Parameter object for reconstructing a persisted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedNotificationData {
    /// Persisted notification identifier.
    pub id: NotificationId,
    /// Persisted recipient identifier.
    pub user_id: UserId,
    /// Persisted message.
    pub message: String,
    /// Persisted kind label.
    pub kind: String,
    /// Persisted read flag.
    pub is_read: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a new unread notification from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::EmptyMessage`] if the message is
    /// blank after trimming.
    pub fn new(
        draft: NotificationDraft,
        clock: &impl Clock,
    ) -> Result<Self, NotificationDomainError> {
        let message = draft.message.trim();
        if message.is_empty() {
            return Err(NotificationDomainError::EmptyMessage);
        }

        Ok(Self {
            id: NotificationId::new(),
            user_id: draft.user_id,
            message: message.to_owned(),
            kind: draft.kind,
            is_read: false,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a notification from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedNotificationData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            message: data.message,
            kind: data.kind,
            is_read: data.is_read,
            created_at: data.created_at,
        }
    }

    /// Marks the notification as read. Reading twice is harmless.
    pub const fn mark_read(&mut self) {
        self.is_read = true;
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the recipient identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind label.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns whether the notification has been read.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.is_read
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
