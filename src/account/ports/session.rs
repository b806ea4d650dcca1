//! Session store port for persisting the active session.

use crate::account::domain::Session;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Persistence contract for the single active session.
///
/// The store mirrors what a browser keeps in local storage: at most one
/// session, overwritten on login and cleared on logout.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves the session, replacing any previous one.
    async fn save(&self, session: &Session) -> SessionStoreResult<()>;

    /// Loads the saved session, if one exists.
    async fn load(&self) -> SessionStoreResult<Option<Session>>;

    /// Clears the saved session. Clearing an empty store succeeds.
    async fn clear(&self) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Persistence-layer failure.
    #[error("session store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
