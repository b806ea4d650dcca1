//! Goal and notification lifecycle tests against the in-memory stores.

use crate::in_memory::helpers::{runtime, user_id};
use gantt::account::domain::UserId;
use gantt::goal::{
    adapters::memory::InMemoryGoalRepository,
    domain::{Goal, GoalDraft, GoalKind},
    services::GoalService,
};
use gantt::notification::{
    adapters::memory::InMemoryNotificationRepository,
    domain::{Notification, NotificationDraft},
    services::NotificationService,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn goal_service() -> GoalService<InMemoryGoalRepository, DefaultClock> {
    GoalService::new(
        Arc::new(InMemoryGoalRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn notification_service() -> NotificationService<InMemoryNotificationRepository, DefaultClock> {
    NotificationService::new(
        Arc::new(InMemoryNotificationRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Tests a goal's full lifecycle: create, progress, complete, delete.
#[rstest]
fn goal_lifecycle_round_trip(
    runtime: io::Result<Runtime>,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let service = goal_service();

    let goal = rt.block_on(service.create(
        GoalDraft::new(user_id, "Swim laps")
            .with_kind(GoalKind::Counter)
            .with_target_count(30),
    ))?;
    assert!(!goal.is_completed());

    let progressed = rt.block_on(service.replace(
        goal.id(),
        GoalDraft::new(user_id, "Swim laps")
            .with_kind(GoalKind::Counter)
            .with_target_count(30)
            .with_current_count(30)
            .with_completed(true),
    ))?;
    assert!(progressed.is_completed());
    assert_eq!(progressed.created_at(), goal.created_at());

    let listed = rt.block_on(service.list_for_user(user_id))?;
    let titles: Vec<&str> = listed.iter().map(Goal::title).collect();
    assert_eq!(titles, ["Swim laps"]);

    rt.block_on(service.delete(goal.id()))?;
    assert!(rt.block_on(service.list_for_user(user_id))?.is_empty());
    Ok(())
}

/// Tests a notification's lifecycle: deliver, read, dismiss.
#[rstest]
fn notification_lifecycle_round_trip(
    runtime: io::Result<Runtime>,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let service = notification_service();

    let first = rt.block_on(service.create(NotificationDraft::new(
        user_id,
        "Stand-up in five minutes",
    )))?;
    let second = rt.block_on(service.create(
        NotificationDraft::new(user_id, "Deadline moved to Friday").with_kind("deadline"),
    ))?;

    rt.block_on(service.mark_read(first.id()))?;

    let feed = rt.block_on(service.list_for_user(user_id))?;
    let read_flags: Vec<bool> = feed.iter().map(Notification::is_read).collect();
    assert_eq!(read_flags, [true, false]);

    rt.block_on(service.delete(first.id()))?;
    let after_delete = rt.block_on(service.list_for_user(user_id))?;
    let remaining: Vec<_> = after_delete.iter().map(Notification::id).collect();
    assert_eq!(remaining, [second.id()]);
    assert_eq!(after_delete.first().map(|n| n.kind()), Some("deadline"));
    Ok(())
}
