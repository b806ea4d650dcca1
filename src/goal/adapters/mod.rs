//! Adapters implementing the goal ports.

pub mod memory;
pub mod postgres;
