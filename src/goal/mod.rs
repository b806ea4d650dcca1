//! Goal tracking.
//!
//! Goals are per-user targets with an optional schedule: a boolean goal is
//! either done or not, while counter and value goals track progress towards
//! a target count. The module follows hexagonal architecture:
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
