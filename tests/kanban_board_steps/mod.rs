//! Step definitions for kanban board behaviour scenarios.

pub mod world;

mod given;
mod when;
mod then;
