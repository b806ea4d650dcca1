//! Orchestration services for the board module.
//!
//! Services coordinate domain operations with repository ports and expose
//! the call surface an HTTP layer would bind to.

mod board;
mod categories;
mod tasks;

pub use board::{
    BoardService, BoardServiceError, BoardServiceResult, MoveOutcome, MoveTaskRequest,
};
pub use categories::{CategoryService, CategoryServiceError, CategoryServiceResult};
pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
