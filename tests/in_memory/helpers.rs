//! Shared test helpers for in-memory adapter integration tests.

use async_trait::async_trait;
use gantt::account::domain::UserId;
use gantt::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{KanbanTask, OrderIndex, TaskDraft, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a clock for aggregate creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Provides a board owner for tests.
#[fixture]
pub fn user_id() -> UserId {
    UserId::new()
}

/// Stores a task in the given column slot and returns it.
///
/// # Errors
///
/// Returns an error if task validation or the store operation fails.
pub fn seed_task(
    rt: &Runtime,
    repo: &impl TaskRepository,
    clock: &DefaultClock,
    user_id: UserId,
    title: &str,
    status: TaskStatus,
    rank: f64,
) -> Result<KanbanTask, Box<dyn std::error::Error + Send + Sync>> {
    let draft = TaskDraft::new(user_id, title)
        .with_status(status)
        .with_order_index(OrderIndex::new(rank));
    let task = KanbanTask::new(draft, clock)?;
    rt.block_on(repo.store(&task))?;
    Ok(task)
}

/// Returns the titles of a projected column, in board order.
#[must_use]
pub fn titles(column: &[KanbanTask]) -> Vec<&str> {
    column.iter().map(KanbanTask::title).collect()
}

/// Task repository that fails `update` once its write budget is spent.
///
/// Every other operation delegates to the wrapped in-memory repository, so
/// a failed apply can be checked against what actually reached the store.
#[derive(Clone)]
pub struct FailingUpdateRepository {
    inner: InMemoryTaskRepository,
    updates_left: Arc<AtomicUsize>,
}

impl FailingUpdateRepository {
    /// Creates a repository that allows `budget` updates before failing.
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self {
            inner: InMemoryTaskRepository::new(),
            updates_left: Arc::new(AtomicUsize::new(budget)),
        }
    }
}

#[async_trait]
impl TaskRepository for FailingUpdateRepository {
    async fn store(&self, task: &KanbanTask) -> TaskRepositoryResult<()> {
        self.inner.store(task).await
    }

    async fn update(&self, task: &KanbanTask) -> TaskRepositoryResult<()> {
        let remaining = self.updates_left.load(Ordering::SeqCst);
        if remaining == 0 {
            return Err(TaskRepositoryError::persistence(io::Error::other(
                "injected update failure",
            )));
        }
        self.updates_left.store(remaining - 1, Ordering::SeqCst);
        self.inner.update(task).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<KanbanTask>> {
        self.inner.find_by_id(id).await
    }

    async fn list_for_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<KanbanTask>> {
        self.inner.list_for_user(user_id).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.delete(id).await
    }

    async fn delete_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> TaskRepositoryResult<usize> {
        self.inner.delete_by_category(user_id, category).await
    }
}
