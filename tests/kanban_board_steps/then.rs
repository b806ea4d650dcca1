//! Then steps for kanban board BDD scenarios.

use super::world::{BoardWorld, parse_column, run_async};
use gantt::board::{domain::KanbanTask, services::MoveOutcome};
use rstest_bdd_macros::then;

#[then("the move is committed")]
fn move_is_committed(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_move {
        Some(MoveOutcome::Committed { .. }) => Ok(()),
        Some(ref other) => Err(eyre::eyre!(
            "expected a committed move, got phase '{}'",
            other.phase().as_str()
        )),
        None => Err(eyre::eyre!("no move recorded in scenario world")),
    }
}

#[then("the move is ignored")]
fn move_is_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_move {
        Some(MoveOutcome::Ignored { .. }) => Ok(()),
        Some(ref other) => Err(eyre::eyre!(
            "expected an ignored move, got phase '{}'",
            other.phase().as_str()
        )),
        None => Err(eyre::eyre!("no move recorded in scenario world")),
    }
}

#[then(r#"the "{column}" column contains only "{title}""#)]
fn column_contains_only(
    world: &BoardWorld,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    if titles != [title.as_str()] {
        return Err(eyre::eyre!(
            "expected ['{title}'] in the {column} column, found {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"the first task in the "{column}" column is "{title}""#)]
fn first_task_in_column_is(
    world: &BoardWorld,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    if titles.first().map(String::as_str) != Some(title.as_str()) {
        return Err(eyre::eyre!(
            "expected '{title}' first in the {column} column, found {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{column}" column contains {count:usize} tasks"#)]
fn column_contains_count(
    world: &BoardWorld,
    column: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    if titles.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks in the {column} column, found {}",
            titles.len()
        ));
    }
    Ok(())
}

#[then("exactly {count:usize} tasks are removed")]
fn tasks_are_removed(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    match world.last_removed {
        Some(removed) if removed == count => Ok(()),
        Some(removed) => Err(eyre::eyre!("expected {count} removed tasks, got {removed}")),
        None => Err(eyre::eyre!("no cascade delete recorded in scenario world")),
    }
}

/// Projects the stored board and returns the titles of one column.
fn column_titles(world: &BoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let status = parse_column(column)?;
    let board = run_async(world.board_service.load_board(world.user_id))
        .map_err(|err| eyre::eyre!("board projection failed: {err}"))?;
    Ok(board
        .column(status)
        .iter()
        .map(KanbanTask::title)
        .map(str::to_owned)
        .collect())
}
