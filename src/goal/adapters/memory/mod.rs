//! In-memory adapters for goal persistence.

mod goals;

pub use goals::InMemoryGoalRepository;
