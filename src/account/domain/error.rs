//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The email address is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The password is empty after trimming.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The issued token is empty after trimming.
    #[error("auth token must not be empty")]
    EmptyAuthToken,
}
