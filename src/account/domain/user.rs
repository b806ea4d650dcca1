//! User aggregate root.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{AccountDomainError, UserId};

/// User aggregate root.
///
/// Holds the credential hash rather than the password itself; hashing is
/// a port concern and happens before the aggregate is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object describing the mutable content of a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name, validated on construction.
    pub username: String,
    /// Email address, validated on construction.
    pub email: String,
    /// Credential hash produced by the hasher port.
    pub password_hash: String,
    /// Avatar location, if one was uploaded.
    pub avatar_url: Option<String>,
}

impl UserDraft {
    /// Creates a draft without an avatar.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            avatar_url: None,
        }
    }

    /// Sets the avatar location.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub username: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted credential hash.
    pub password_hash: String,
    /// Persisted avatar location, if one was uploaded.
    pub avatar_url: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user account from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUsername`] or
    /// [`AccountDomainError::EmptyEmail`] when either value is blank after
    /// trimming.
    pub fn new(draft: UserDraft, clock: &impl Clock) -> Result<Self, AccountDomainError> {
        Self::build(UserId::new(), clock.utc(), draft)
    }

    /// Builds the replacement for an existing account, keeping its
    /// identity and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUsername`] or
    /// [`AccountDomainError::EmptyEmail`] when either value is blank after
    /// trimming.
    pub fn replacement(
        id: UserId,
        created_at: DateTime<Utc>,
        draft: UserDraft,
    ) -> Result<Self, AccountDomainError> {
        Self::build(id, created_at, draft)
    }

    fn build(
        id: UserId,
        created_at: DateTime<Utc>,
        draft: UserDraft,
    ) -> Result<Self, AccountDomainError> {
        let username = validated_username(draft.username)?;
        let email = draft.email.trim();
        if email.is_empty() {
            return Err(AccountDomainError::EmptyEmail);
        }

        Ok(Self {
            id,
            username,
            email: email.to_owned(),
            password_hash: draft.password_hash,
            avatar_url: draft.avatar_url,
            created_at,
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            avatar_url: data.avatar_url,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the credential hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the avatar location, if one was uploaded.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Updates the profile fields a user may edit.
    ///
    /// The username is always replaced; the avatar only when a new
    /// location is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUsername`] when the new username
    /// is blank after trimming.
    pub fn update_profile(
        &mut self,
        username: impl Into<String>,
        avatar_url: Option<String>,
    ) -> Result<(), AccountDomainError> {
        self.username = validated_username(username)?;
        if let Some(url) = avatar_url {
            self.avatar_url = Some(url);
        }
        Ok(())
    }
}

fn validated_username(username: impl Into<String>) -> Result<String, AccountDomainError> {
    let raw = username.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AccountDomainError::EmptyUsername);
    }
    Ok(trimmed.to_owned())
}
