//! Application services for the goal context.

mod goals;

pub use goals::{GoalService, GoalServiceError, GoalServiceResult};
