//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use gantt::account::domain::UserId;
use gantt::board::{
    adapters::memory::{InMemoryCategoryRepository, InMemoryTaskRepository},
    domain::{Category, ColumnRef, TaskId, TaskStatus},
    services::{BoardService, CategoryService, MoveOutcome, TaskService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Task CRUD service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Category service type used by the BDD world.
pub type TestCategoryService = CategoryService<InMemoryCategoryRepository, InMemoryTaskRepository>;

/// Scenario world for board behaviour tests.
///
/// All services share one task store, so writes made through the task
/// service are visible to board projections and category cascades.
pub struct BoardWorld {
    /// Board projection and move service under test.
    pub board_service: BoardService<InMemoryTaskRepository>,
    /// Task CRUD service for seeding board state.
    pub task_service: TestTaskService,
    /// Category service for cascade scenarios.
    pub category_service: TestCategoryService,
    /// Owner of every task and category in the scenario.
    pub user_id: UserId,
    /// Categories created during the scenario, by creation order.
    pub categories: Vec<Category>,
    /// Outcome of the last move request.
    pub last_move: Option<MoveOutcome>,
    /// Number of tasks removed by the last category deletion.
    pub last_removed: Option<usize>,
}

impl BoardWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        Self {
            board_service: BoardService::new(Arc::clone(&tasks)),
            task_service: TaskService::new(Arc::clone(&tasks), Arc::new(DefaultClock)),
            category_service: CategoryService::new(categories, tasks),
            user_id: UserId::new(),
            categories: Vec::new(),
            last_move: None,
            last_removed: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Maps a column label from the feature text onto a task status.
///
/// # Errors
///
/// Returns an error for labels that name no board column.
pub fn parse_column(label: &str) -> Result<TaskStatus, eyre::Report> {
    match label {
        "todo" => Ok(TaskStatus::Todo),
        "in progress" => Ok(TaskStatus::InProgress),
        "done" => Ok(TaskStatus::Done),
        other => Err(eyre::eyre!("unknown board column: {other}")),
    }
}

/// Finds a task by title on a fresh board projection.
///
/// # Errors
///
/// Returns an error if the board cannot be loaded or no column holds a
/// task with the title.
pub fn locate_task(world: &BoardWorld, title: &str) -> Result<(TaskId, ColumnRef), eyre::Report> {
    let board = run_async(world.board_service.load_board(world.user_id))
        .map_err(|err| eyre::eyre!("board projection failed: {err}"))?;
    for status in TaskStatus::ALL {
        let found = board
            .column(status)
            .iter()
            .enumerate()
            .find(|(_, task)| task.title() == title);
        if let Some((index, task)) = found {
            return Ok((task.id(), ColumnRef::new(status, index)));
        }
    }
    Err(eyre::eyre!("no task titled '{title}' on the board"))
}
