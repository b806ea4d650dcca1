//! Domain model for user accounts and sessions.
//!
//! The account domain models registration, credential-backed login, and
//! the authenticated session, while hashing and token issuance stay
//! behind ports.

mod error;
mod ids;
mod session;
mod user;

pub use error::AccountDomainError;
pub use ids::UserId;
pub use session::{AuthToken, Session};
pub use user::{PersistedUserData, User, UserDraft};
