//! Diesel row models for account persistence.

use super::schema::users;
use crate::account::domain::{PersistedUserData, User, UserId};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Credential hash.
    pub password_hash: String,
    /// Optional avatar location.
    pub avatar_url: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Maps a stored row back into the domain aggregate.
    #[must_use]
    pub fn into_user(self) -> User {
        User::from_persisted(PersistedUserData {
            id: UserId::from_uuid(self.id),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        })
    }
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Credential hash.
    pub password_hash: String,
    /// Optional avatar location.
    pub avatar_url: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewUserRow {
    /// Builds an insert row from a domain user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id().into_inner(),
            username: user.username().to_owned(),
            email: user.email().to_owned(),
            password_hash: user.password_hash().to_owned(),
            avatar_url: user.avatar_url().map(str::to_owned),
            created_at: user.created_at(),
        }
    }
}
