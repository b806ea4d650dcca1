//! Board projection and drag-move tests for the in-memory task store.

use crate::in_memory::helpers::{clock, runtime, seed_task, titles, user_id};
use gantt::account::domain::UserId;
use gantt::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ApplyPhase, ColumnRef, TaskStatus},
    ports::TaskRepository,
    services::{BoardService, MoveOutcome, MoveTaskRequest},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Tests that stored tasks project into rank-ordered status columns.
#[rstest]
fn projects_seeded_tasks_into_columns(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(InMemoryTaskRepository::new());
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Book venue", TaskStatus::Todo, 1.0)?;
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Outline talk", TaskStatus::Todo, 0.0)?;
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Send invites", TaskStatus::InProgress, 0.0)?;
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Pick a date", TaskStatus::Done, 0.0)?;

    let service = BoardService::new(repo);
    let board = rt.block_on(service.load_board(user_id))?;

    assert_eq!(titles(board.todo()), ["Outline talk", "Book venue"]);
    assert_eq!(titles(board.in_progress()), ["Send invites"]);
    assert_eq!(titles(board.done()), ["Pick a date"]);
    Ok(())
}

/// Tests that a committed cross-column move is visible to a service built
/// later over the same store.
#[rstest]
fn committed_move_is_visible_to_a_fresh_service(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(InMemoryTaskRepository::new());
    let moved = seed_task(
        &rt,
        repo.as_ref(),
        &clock,
        user_id,
        "Write report",
        TaskStatus::Todo,
        0.0,
    )?;
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Review budget", TaskStatus::Todo, 1.0)?;

    let service = BoardService::new(Arc::clone(&repo));
    let request = MoveTaskRequest::new(user_id, moved.id(), ColumnRef::new(TaskStatus::Todo, 0))
        .with_destination(ColumnRef::new(TaskStatus::InProgress, 0));
    let outcome = rt.block_on(service.move_task(request))?;
    assert_eq!(outcome.phase(), ApplyPhase::Committed);

    let fresh = BoardService::new(repo);
    let board = rt.block_on(fresh.load_board(user_id))?;
    assert_eq!(titles(board.todo()), ["Review budget"]);
    assert_eq!(titles(board.in_progress()), ["Write report"]);
    Ok(())
}

/// Tests that a task dragged to the done column changes status in the
/// store, not just in the returned layout.
#[rstest]
fn moving_to_done_updates_the_stored_status(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(InMemoryTaskRepository::new());
    let task = seed_task(
        &rt,
        repo.as_ref(),
        &clock,
        user_id,
        "Ship release",
        TaskStatus::InProgress,
        0.0,
    )?;

    let service = BoardService::new(Arc::clone(&repo));
    let request = MoveTaskRequest::new(
        user_id,
        task.id(),
        ColumnRef::new(TaskStatus::InProgress, 0),
    )
    .with_destination(ColumnRef::new(TaskStatus::Done, 0));
    rt.block_on(service.move_task(request))?;

    let stored = rt
        .block_on(repo.find_by_id(task.id()))?
        .expect("task present");
    assert_eq!(stored.status(), TaskStatus::Done);
    Ok(())
}

/// Tests that a drop without a destination leaves the store untouched.
#[rstest]
fn drop_without_destination_changes_nothing(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(InMemoryTaskRepository::new());
    let task = seed_task(&rt, repo.as_ref(), &clock, user_id, "Book venue", TaskStatus::Todo, 0.0)?;

    let service = BoardService::new(Arc::clone(&repo));
    let before = rt.block_on(service.load_board(user_id))?;

    let request = MoveTaskRequest::new(user_id, task.id(), ColumnRef::new(TaskStatus::Todo, 0));
    let outcome = rt.block_on(service.move_task(request))?;

    assert!(matches!(outcome, MoveOutcome::Ignored { .. }));
    let after = rt.block_on(service.load_board(user_id))?;
    assert_eq!(after, before);
    Ok(())
}
