//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::board::{
    domain::{KanbanTask, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// The per-user index records insertion order, so listings return tasks
/// oldest first just as the database adapter does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, KanbanTask>,
    user_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Removes a task ID from a user's index, cleaning up the entry if empty.
fn remove_from_user_index(
    index: &mut HashMap<UserId, Vec<TaskId>>,
    user_id: UserId,
    task_id: TaskId,
) {
    if let Some(ids) = index.get_mut(&user_id) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(&user_id);
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &KanbanTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .user_index
            .entry(task.user_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &KanbanTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_owner = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .user_id();

        // A replacement may reassign the task to another user.
        if old_owner != task.user_id() {
            remove_from_user_index(&mut state.user_index, old_owner, task.id());
            state
                .user_index
                .entry(task.user_id())
                .or_default()
                .push(task.id());
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<KanbanTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<KanbanTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .user_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let task = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        remove_from_user_index(&mut state.user_index, task.user_id(), id);
        Ok(())
    }

    async fn delete_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let doomed: Vec<TaskId> = state
            .user_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter(|id| {
                        state
                            .tasks
                            .get(id)
                            .is_some_and(|task| task.category() == category)
                    })
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        for id in &doomed {
            state.tasks.remove(id);
            remove_from_user_index(&mut state.user_index, user_id, *id);
        }
        Ok(doomed.len())
    }
}
