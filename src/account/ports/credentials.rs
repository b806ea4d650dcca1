//! Credential ports for password hashing and token issuance.
//!
//! Both ports are synchronous: hashing and signing are CPU work with no
//! I/O, and keeping them sync lets the auth service call them inline.

use crate::account::domain::{AuthToken, User};
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential port operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Password hashing contract.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hashes a password for storage.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the hashing backend fails.
    fn hash(&self, password: &str) -> CredentialResult<String>;

    /// Checks a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the hashing backend fails; a
    /// mismatched password is `Ok(false)`, not an error.
    fn verify(&self, password: &str, password_hash: &str) -> CredentialResult<bool>;
}

/// Token issuance contract.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Issues a bearer token for an authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the signing backend fails.
    fn issue(&self, user: &User) -> CredentialResult<AuthToken>;
}

/// Errors returned by credential port implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// The hashing or signing backend failed.
    #[error("credential backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
