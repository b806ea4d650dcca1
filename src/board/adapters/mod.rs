//! Persistence adapters for the board module.
//!
//! Concrete implementations of the board repository ports, following
//! hexagonal architecture principles. Adapters handle all infrastructure
//! concerns while the domain remains pure.
//!
//! - [`memory`]: thread-safe in-memory storage for unit testing
//! - [`postgres`]: `PostgreSQL` persistence using Diesel ORM

pub mod memory;
pub mod postgres;
