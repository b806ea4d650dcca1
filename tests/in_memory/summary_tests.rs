//! Completion summary tests over service-written goals and tasks.

use crate::in_memory::helpers::{runtime, user_id};
use gantt::account::domain::UserId;
use gantt::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDraft, TaskStatus},
    services::TaskService,
};
use gantt::goal::{
    adapters::memory::InMemoryGoalRepository, domain::GoalDraft, services::GoalService,
};
use gantt::summary::services::SummaryService;
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

struct Services {
    goals: GoalService<InMemoryGoalRepository, DefaultClock>,
    tasks: TaskService<InMemoryTaskRepository, DefaultClock>,
    summary: SummaryService<InMemoryGoalRepository, InMemoryTaskRepository>,
}

fn services() -> Services {
    let goal_repo = Arc::new(InMemoryGoalRepository::new());
    let task_repo = Arc::new(InMemoryTaskRepository::new());
    Services {
        goals: GoalService::new(Arc::clone(&goal_repo), Arc::new(DefaultClock)),
        tasks: TaskService::new(Arc::clone(&task_repo), Arc::new(DefaultClock)),
        summary: SummaryService::new(goal_repo, task_repo),
    }
}

/// Tests that the summary counts reflect goal and task writes made
/// through the CRUD services.
#[rstest]
fn counts_track_service_writes(
    runtime: io::Result<Runtime>,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let Services {
        goals,
        tasks,
        summary,
    } = services();

    let goal = rt.block_on(goals.create(GoalDraft::new(user_id, "Meditate")))?;
    rt.block_on(goals.create(GoalDraft::new(user_id, "Read every evening")))?;
    rt.block_on(goals.replace(
        goal.id(),
        GoalDraft::new(user_id, "Meditate").with_completed(true),
    ))?;

    rt.block_on(tasks.create(TaskDraft::new(user_id, "Sort inbox")))?;
    rt.block_on(tasks.create(
        TaskDraft::new(user_id, "Ship release").with_status(TaskStatus::Done),
    ))?;

    assert_eq!(rt.block_on(summary.completed_goals_count(user_id))?, 1);
    assert_eq!(rt.block_on(summary.completed_tasks_count(user_id))?, 1);
    Ok(())
}

/// Tests that by-day groupings cover exactly the completed items and key
/// them by their creation day.
#[rstest]
fn completions_group_by_creation_day(
    runtime: io::Result<Runtime>,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let Services {
        goals,
        tasks,
        summary,
    } = services();

    let done_goal = rt.block_on(goals.create(
        GoalDraft::new(user_id, "Practice scales").with_completed(true),
    ))?;
    rt.block_on(goals.create(GoalDraft::new(user_id, "Still open")))?;
    let done_task = rt.block_on(tasks.create(
        TaskDraft::new(user_id, "Ship release").with_status(TaskStatus::Done),
    ))?;

    let goal_days = rt.block_on(summary.goal_completions_by_day(user_id))?;
    assert_eq!(goal_days.values().sum::<usize>(), 1);
    assert!(goal_days.contains_key(&done_goal.created_at().date_naive()));

    let task_days = rt.block_on(summary.task_completions_by_day(user_id))?;
    assert_eq!(task_days.values().sum::<usize>(), 1);
    assert!(task_days.contains_key(&done_task.created_at().date_naive()));
    Ok(())
}
