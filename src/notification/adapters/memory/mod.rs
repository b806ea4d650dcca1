//! In-memory adapters for notification persistence.

mod notifications;

pub use notifications::InMemoryNotificationRepository;
