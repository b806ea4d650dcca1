//! In-memory goal repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::goal::{
    domain::{Goal, GoalId},
    ports::{GoalRepository, GoalRepositoryError, GoalRepositoryResult},
};

/// Thread-safe in-memory goal repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    state: Arc<RwLock<InMemoryGoalState>>,
}

#[derive(Debug, Default)]
struct InMemoryGoalState {
    goals: HashMap<GoalId, Goal>,
    user_index: HashMap<UserId, Vec<GoalId>>,
}

impl InMemoryGoalRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.goals.contains_key(&goal.id()) {
            return Err(GoalRepositoryError::DuplicateGoal(goal.id()));
        }

        state
            .user_index
            .entry(goal.user_id())
            .or_default()
            .push(goal.id());
        state.goals.insert(goal.id(), goal.clone());
        Ok(())
    }

    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let old_owner = state
            .goals
            .get(&goal.id())
            .ok_or(GoalRepositoryError::NotFound(goal.id()))?
            .user_id();

        // A replacement may reassign the goal to another user.
        if old_owner != goal.user_id() {
            if let Some(ids) = state.user_index.get_mut(&old_owner) {
                ids.retain(|candidate| *candidate != goal.id());
                if ids.is_empty() {
                    state.user_index.remove(&old_owner);
                }
            }
            state
                .user_index
                .entry(goal.user_id())
                .or_default()
                .push(goal.id());
        }

        state.goals.insert(goal.id(), goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GoalId) -> GoalRepositoryResult<Option<Goal>> {
        let state = self.state.read().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.goals.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: UserId) -> GoalRepositoryResult<Vec<Goal>> {
        let state = self.state.read().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let goals = state
            .user_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.goals.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(goals)
    }

    async fn delete(&self, id: GoalId) -> GoalRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            GoalRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let goal = state
            .goals
            .remove(&id)
            .ok_or(GoalRepositoryError::NotFound(id))?;
        if let Some(ids) = state.user_index.get_mut(&goal.user_id()) {
            ids.retain(|candidate| *candidate != id);
            if ids.is_empty() {
                state.user_index.remove(&goal.user_id());
            }
        }
        Ok(())
    }
}
