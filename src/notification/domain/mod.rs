//! Domain model for user notifications.

mod error;
mod ids;
mod notification;

pub use error::NotificationDomainError;
pub use ids::NotificationId;
pub use notification::{Notification, NotificationDraft, PersistedNotificationData};
