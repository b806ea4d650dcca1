//! Port contracts for the account module.
//!
//! Ports define infrastructure-agnostic interfaces used by account
//! services: user persistence, credential handling, and session storage.

pub mod credentials;
pub mod repository;
pub mod session;

pub use credentials::{CredentialError, CredentialResult, PasswordHasher, TokenIssuer};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use session::{SessionStore, SessionStoreError, SessionStoreResult};

#[cfg(test)]
pub use credentials::{MockPasswordHasher, MockTokenIssuer};
