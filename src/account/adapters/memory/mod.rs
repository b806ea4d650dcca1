//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without database or credential-backend dependencies.

mod credentials;
mod session;
mod users;

pub use credentials::{PlainTextPasswordHasher, RandomTokenIssuer};
pub use session::InMemorySessionStore;
pub use users::InMemoryUserRepository;
