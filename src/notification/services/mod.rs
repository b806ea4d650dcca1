//! Application services for the notification context.

mod notifications;

pub use notifications::{
    NotificationService, NotificationServiceError, NotificationServiceResult,
};
