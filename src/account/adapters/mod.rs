//! Persistence and credential adapters for the account module.
//!
//! Concrete implementations of the account ports, following hexagonal
//! architecture principles. Adapters handle all infrastructure concerns
//! while the domain remains pure.
//!
//! - [`memory`]: in-memory storage and credential stand-ins for testing
//! - [`postgres`]: `PostgreSQL` persistence using Diesel ORM

pub mod memory;
pub mod postgres;
