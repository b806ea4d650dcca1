//! Domain model for the kanban board.
//!
//! The board domain models per-user tasks and categories, the projection
//! of tasks into status columns, and the two-phase apply used when a task
//! is dragged between slots, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod category;
mod color;
mod columns;
mod error;
mod ids;
mod movement;
mod order;
mod priority;
mod status;
mod task;

pub use category::{Category, CategoryDraft, CategoryName, PersistedCategoryData};
pub use color::HexColor;
pub use columns::{BoardColumns, ColumnRef};
pub use error::{BoardDomainError, ParsePriorityError, ParseTaskStatusError};
pub use ids::{CategoryId, TaskId};
pub use movement::{ApplyPhase, MoveApply};
pub use order::OrderIndex;
pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{KanbanTask, PersistedTaskData, TaskDraft};
