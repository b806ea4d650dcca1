//! Error types for notification domain validation.

/// Errors raised while validating notification data.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotificationDomainError {
    /// The notification message was empty or whitespace.
    #[error("notification message must not be empty")]
    EmptyMessage,
}
