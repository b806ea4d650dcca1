//! `PostgreSQL`-backed adapters for notification persistence.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{NotificationPgPool, PostgresNotificationRepository};
