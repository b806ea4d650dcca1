//! When steps for kanban board BDD scenarios.

use super::world::{BoardWorld, locate_task, parse_column, run_async};
use gantt::board::{domain::ColumnRef, services::MoveTaskRequest};
use rstest_bdd_macros::when;

#[when(r#""{title}" is dragged to the top of the "{column}" column"#)]
fn dragged_to_top_of_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let (task_id, source) = locate_task(world, &title)?;
    let destination = ColumnRef::new(parse_column(&column)?, 0);
    let request =
        MoveTaskRequest::new(world.user_id, task_id, source).with_destination(destination);
    let outcome = run_async(world.board_service.move_task(request))
        .map_err(|err| eyre::eyre!("move failed: {err}"))?;
    world.last_move = Some(outcome);
    Ok(())
}

#[when(r#""{title}" is dropped outside the board"#)]
fn dropped_outside_the_board(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let (task_id, source) = locate_task(world, &title)?;
    let request = MoveTaskRequest::new(world.user_id, task_id, source);
    let outcome = run_async(world.board_service.move_task(request))
        .map_err(|err| eyre::eyre!("move failed: {err}"))?;
    world.last_move = Some(outcome);
    Ok(())
}

#[when(r#"the "{name}" category is deleted"#)]
fn category_is_deleted(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let category = world
        .categories
        .iter()
        .find(|category| category.name().as_str() == name)
        .ok_or_else(|| eyre::eyre!("no category named '{name}' in scenario world"))?;
    let removed = run_async(world.category_service.delete_with_tasks(category.id()))
        .map_err(|err| eyre::eyre!("cascade delete failed: {err}"))?;
    world.last_removed = Some(removed);
    Ok(())
}
