//! In-memory session store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::Session,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store holding at most one session.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<RwLock<Option<Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &Session) -> SessionStoreResult<()> {
        let mut slot = self.slot.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *slot = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> SessionStoreResult<Option<Session>> {
        let slot = self.slot.read().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slot.clone())
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        let mut slot = self.slot.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *slot = None;
        Ok(())
    }
}
