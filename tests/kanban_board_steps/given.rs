//! Given steps for kanban board BDD scenarios.

use super::world::{BoardWorld, parse_column, run_async};
use eyre::WrapErr;
use gantt::board::domain::{CategoryDraft, TaskDraft};
use rstest_bdd_macros::given;

#[given(r#"a task "{title}" in the "{column}" column"#)]
fn a_task_in_a_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = parse_column(&column)?;
    let draft = TaskDraft::new(world.user_id, title).with_status(status);
    run_async(world.task_service.create(draft)).wrap_err("seed task for scenario")?;
    Ok(())
}

#[given(r#"a category named "{name}""#)]
fn a_category_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .category_service
            .create(CategoryDraft::new(world.user_id, name)),
    )
    .wrap_err("seed category for scenario")?;
    world.categories.push(created);
    Ok(())
}

#[given(r#"a task "{title}" in the "{name}" category"#)]
fn a_task_in_a_category(
    world: &mut BoardWorld,
    title: String,
    name: String,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(world.user_id, title).with_category(name);
    run_async(world.task_service.create(draft)).wrap_err("seed categorised task for scenario")?;
    Ok(())
}
