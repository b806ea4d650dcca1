//! Credential adapters without external backends.
//!
//! These adapters satisfy the credential ports for tests and local runs.
//! Neither is suitable for production: the hasher stores a recoverable
//! marker rather than a key-derived digest, and the issuer's tokens carry
//! no signature.

use uuid::Uuid;

use crate::account::{
    domain::{AuthToken, User},
    ports::{CredentialError, CredentialResult, PasswordHasher, TokenIssuer},
};

/// Marker prefixed to passwords by [`PlainTextPasswordHasher`].
const PLAIN_PREFIX: &str = "plain:";

/// Hasher that marks passwords instead of digesting them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextPasswordHasher;

impl PlainTextPasswordHasher {
    /// Creates the hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasher for PlainTextPasswordHasher {
    fn hash(&self, password: &str) -> CredentialResult<String> {
        Ok(format!("{PLAIN_PREFIX}{password}"))
    }

    fn verify(&self, password: &str, password_hash: &str) -> CredentialResult<bool> {
        let matches = password_hash
            .strip_prefix(PLAIN_PREFIX)
            .is_some_and(|stored| stored == password);
        Ok(matches)
    }
}

/// Issuer producing random, unsigned bearer tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenIssuer;

impl RandomTokenIssuer {
    /// Creates the issuer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TokenIssuer for RandomTokenIssuer {
    fn issue(&self, _user: &User) -> CredentialResult<AuthToken> {
        AuthToken::new(Uuid::new_v4().to_string()).map_err(CredentialError::backend)
    }
}
