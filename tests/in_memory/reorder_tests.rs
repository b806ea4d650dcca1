//! Same-column reorder tests, including rollback on write failure.

use crate::in_memory::helpers::{
    FailingUpdateRepository, clock, runtime, seed_task, titles, user_id,
};
use gantt::account::domain::UserId;
use gantt::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ApplyPhase, ColumnRef, KanbanTask, OrderIndex, TaskStatus},
    ports::TaskRepositoryError,
    services::{BoardService, MoveOutcome, MoveTaskRequest},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Tests that moving a task to the top of its column persists the new
/// order with settled ranks.
#[rstest]
fn reordering_within_a_column_persists(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(InMemoryTaskRepository::new());
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Draft agenda", TaskStatus::Todo, 0.0)?;
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Collect slides", TaskStatus::Todo, 1.0)?;
    let moved = seed_task(
        &rt,
        repo.as_ref(),
        &clock,
        user_id,
        "Send recap",
        TaskStatus::Todo,
        2.0,
    )?;

    let service = BoardService::new(Arc::clone(&repo));
    let request = MoveTaskRequest::new(user_id, moved.id(), ColumnRef::new(TaskStatus::Todo, 2))
        .with_destination(ColumnRef::new(TaskStatus::Todo, 0));
    let outcome = rt.block_on(service.move_task(request))?;
    assert_eq!(outcome.phase(), ApplyPhase::Committed);

    let board = rt.block_on(service.load_board(user_id))?;
    assert_eq!(
        titles(board.todo()),
        ["Send recap", "Draft agenda", "Collect slides"]
    );
    let ranks: Vec<OrderIndex> = board.todo().iter().map(KanbanTask::order_index).collect();
    assert_eq!(
        ranks,
        [
            OrderIndex::from(0_u32),
            OrderIndex::from(1_u32),
            OrderIndex::from(2_u32)
        ]
    );
    Ok(())
}

/// Tests that a move whose first write fails leaves the stored board
/// exactly as it was.
#[rstest]
fn failed_write_rolls_back_the_board(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(FailingUpdateRepository::new(0));
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
    let before = rt.block_on(service.load_board(user_id))?;

    let request = MoveTaskRequest::new(user_id, moved.id(), ColumnRef::new(TaskStatus::Todo, 0))
        .with_destination(ColumnRef::new(TaskStatus::InProgress, 0));
    let outcome = rt.block_on(service.move_task(request))?;

    let MoveOutcome::RolledBack { board, error } = outcome else {
        return Err("expected a rolled-back outcome".into());
    };
    assert!(matches!(error, TaskRepositoryError::Persistence(_)));
    assert_eq!(board, before);

    let after = rt.block_on(service.load_board(user_id))?;
    assert_eq!(after, before);
    Ok(())
}

/// Tests that a part-written apply reports the stored board, not the
/// staged layout.
#[rstest]
fn partial_write_failure_reports_the_stored_board(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let repo = Arc::new(FailingUpdateRepository::new(1));
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Draft agenda", TaskStatus::Todo, 0.0)?;
    seed_task(&rt, repo.as_ref(), &clock, user_id, "Collect slides", TaskStatus::Todo, 1.0)?;
    let moved = seed_task(
        &rt,
        repo.as_ref(),
        &clock,
        user_id,
        "Send recap",
        TaskStatus::Todo,
        2.0,
    )?;

    let service = BoardService::new(Arc::clone(&repo));
    let request = MoveTaskRequest::new(user_id, moved.id(), ColumnRef::new(TaskStatus::Todo, 2))
        .with_destination(ColumnRef::new(TaskStatus::Todo, 0));
    let outcome = rt.block_on(service.move_task(request))?;

    assert_eq!(outcome.phase(), ApplyPhase::RolledBack);
    // The reported board matches a fresh projection of the store, which
    // may include the writes that landed before the failure.
    let reloaded = rt.block_on(service.load_board(user_id))?;
    assert_eq!(outcome.board(), &reloaded);
    Ok(())
}
