//! `PostgreSQL` adapters for account persistence.

pub(crate) mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{AccountPgPool, PostgresUserRepository};
