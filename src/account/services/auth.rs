//! Service layer for registration, login, and session handling.

use crate::account::{
    domain::{AccountDomainError, Session, User, UserDraft},
    ports::{
        CredentialError, PasswordHasher, SessionStore, SessionStoreError, TokenIssuer,
        UserRepository, UserRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Request payload for logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Service-level errors for auth operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// User repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Hashing or token issuance failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),
    /// Session store operation failed.
    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),
    /// The email or password did not match an account.
    ///
    /// Deliberately covers both cases; login never reveals which half was
    /// wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Result type for auth service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Registration and login orchestration service.
#[derive(Clone)]
pub struct AuthService<R, H, T, S, C>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
    S: SessionStore,
    C: Clock + Send + Sync,
{
    users: Arc<R>,
    hasher: Arc<H>,
    issuer: Arc<T>,
    sessions: Arc<S>,
    clock: Arc<C>,
}

impl<R, H, T, S, C> AuthService<R, H, T, S, C>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
    S: SessionStore,
    C: Clock + Send + Sync,
{
    /// Creates a new auth service.
    #[must_use]
    pub const fn new(
        users: Arc<R>,
        hasher: Arc<H>,
        issuer: Arc<T>,
        sessions: Arc<S>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            users,
            hasher,
            issuer,
            sessions,
            clock,
        }
    }

    /// Registers a new account.
    ///
    /// The password is hashed before the aggregate is built; registration
    /// does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Domain`] when a field is blank,
    /// [`AuthError::Repository`] with
    /// [`UserRepositoryError::DuplicateEmail`] when the address is already
    /// registered, or [`AuthError::Credential`] when hashing fails.
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<User> {
        if request.password.trim().is_empty() {
            return Err(AccountDomainError::EmptyPassword.into());
        }
        let password_hash = self.hasher.hash(&request.password)?;
        let draft = UserDraft::new(request.username, request.email, password_hash);
        let user = User::new(draft, self.clock.as_ref())?;

        // This pre-check improves semantic error reporting but is not relied
        // on for correctness: the repository still enforces email uniqueness
        // in the TOCTOU window between check and store.
        if self.users.find_by_email(user.email()).await?.is_some() {
            return Err(UserRepositoryError::DuplicateEmail(user.email().to_owned()).into());
        }

        self.users.store(&user).await?;
        Ok(user)
    }

    /// Logs a user in and saves the resulting session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no account holds the
    /// email or the password does not verify; the two cases are not
    /// distinguished.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<Session> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let verified = self.hasher.verify(&request.password, user.password_hash())?;
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user)?;
        let session = Session::new(user, token);
        self.sessions.save(&session).await?;
        Ok(session)
    }

    /// Clears the saved session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the store fails.
    pub async fn logout(&self) -> AuthResult<()> {
        self.sessions.clear().await?;
        Ok(())
    }

    /// Restores the saved session, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the store fails.
    pub async fn restore(&self) -> AuthResult<Option<Session>> {
        Ok(self.sessions.load().await?)
    }
}
