//! Adapters implementing the notification ports.

pub mod memory;
pub mod postgres;
