//! User notification feed.
//!
//! Notifications carry short messages to a single user. Delivery here
//! means storage: each record sits in the recipient's feed until read
//! and eventually deleted. The module follows hexagonal architecture:
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
