//! Authenticated session value objects.

use serde::{Deserialize, Serialize};

use super::{AccountDomainError, User};

/// Opaque bearer token issued at login.
///
/// The token never appears in `Display` output; read it deliberately via
/// [`AuthToken::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a validated token.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyAuthToken`] when the value is
    /// blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AccountDomainError::EmptyAuthToken);
        }
        Ok(Self(raw))
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// An authenticated user together with the token vouching for them.
///
/// Sessions are what the session store persists and what a login or
/// restore hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: User,
    token: AuthToken,
}

impl Session {
    /// Creates a session for a user and token.
    #[must_use]
    pub const fn new(user: User, token: AuthToken) -> Self {
        Self { user, token }
    }

    /// Returns the authenticated user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &AuthToken {
        &self.token
    }

    /// Consumes the session, returning the user.
    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }
}
