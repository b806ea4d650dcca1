//! User accounts and authentication.
//!
//! This module covers registration, credential-backed login, session
//! save and restore, and user account CRUD with profile editing. Password
//! hashing and token issuance are ports so the crate never commits to a
//! particular credential backend. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
