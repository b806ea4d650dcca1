//! Application service for productivity summaries.

use crate::account::domain::UserId;
use crate::board::{
    domain::{KanbanTask, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::goal::{
    domain::Goal,
    ports::{GoalRepository, GoalRepositoryError},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Errors surfaced by the summary service.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// The goal repository rejected the operation.
    #[error(transparent)]
    Goals(#[from] GoalRepositoryError),
    /// The task repository rejected the operation.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

/// Result alias for summary operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Read-only service aggregating completion statistics per user.
///
/// Counts are derived on demand from the stored goals and tasks rather
/// than maintained incrementally, so they are always consistent with
/// the repositories they read.
#[derive(Clone)]
pub struct SummaryService<G, T>
where
    G: GoalRepository,
    T: TaskRepository,
{
    goals: Arc<G>,
    tasks: Arc<T>,
}

impl<G, T> SummaryService<G, T>
where
    G: GoalRepository,
    T: TaskRepository,
{
    /// Creates a new service over the given repositories.
    #[must_use]
    pub const fn new(goals: Arc<G>, tasks: Arc<T>) -> Self {
        Self { goals, tasks }
    }

    /// Counts the user's completed goals.
    ///
    /// # Errors
    /// Returns an error if the goal listing fails.
    pub async fn completed_goals_count(&self, user_id: UserId) -> SummaryResult<usize> {
        let goals = self.goals.list_for_user(user_id).await?;
        Ok(goals.iter().filter(|goal| goal.is_completed()).count())
    }

    /// Counts the user's tasks in the done column.
    ///
    /// # Errors
    /// Returns an error if the task listing fails.
    pub async fn completed_tasks_count(&self, user_id: UserId) -> SummaryResult<usize> {
        let tasks = self.tasks.list_for_user(user_id).await?;
        Ok(tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Done)
            .count())
    }

    /// Groups the user's completed goals by the calendar day they were
    /// created, ordered by date.
    ///
    /// # Errors
    /// Returns an error if the goal listing fails.
    pub async fn goal_completions_by_day(
        &self,
        user_id: UserId,
    ) -> SummaryResult<BTreeMap<NaiveDate, usize>> {
        let goals = self.goals.list_for_user(user_id).await?;
        Ok(completions_by_day(
            goals.iter().filter(|goal| goal.is_completed()),
            Goal::created_at,
        ))
    }

    /// Groups the user's done tasks by the calendar day they were
    /// created, ordered by date.
    ///
    /// # Errors
    /// Returns an error if the task listing fails.
    pub async fn task_completions_by_day(
        &self,
        user_id: UserId,
    ) -> SummaryResult<BTreeMap<NaiveDate, usize>> {
        let tasks = self.tasks.list_for_user(user_id).await?;
        Ok(completions_by_day(
            tasks.iter().filter(|task| task.status() == TaskStatus::Done),
            KanbanTask::created_at,
        ))
    }
}

fn completions_by_day<'a, I, V, F>(items: I, created_at: F) -> BTreeMap<NaiveDate, usize>
where
    I: Iterator<Item = &'a V>,
    V: 'a,
    F: Fn(&V) -> chrono::DateTime<chrono::Utc>,
{
    let mut by_day = BTreeMap::new();
    for item in items {
        let day = created_at(item).date_naive();
        *by_day.entry(day).or_insert(0_usize) += 1;
    }
    by_day
}
