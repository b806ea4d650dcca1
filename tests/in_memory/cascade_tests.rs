//! Category deletion cascade tests across the category and task stores.

use crate::in_memory::helpers::{clock, runtime, seed_task, titles, user_id};
use gantt::account::domain::UserId;
use gantt::board::{
    adapters::memory::{InMemoryCategoryRepository, InMemoryTaskRepository},
    domain::{CategoryDraft, KanbanTask, TaskDraft, TaskStatus},
    ports::TaskRepository,
    services::CategoryService,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

type MemoryCategoryService = CategoryService<InMemoryCategoryRepository, InMemoryTaskRepository>;

struct Stores {
    service: MemoryCategoryService,
    tasks: Arc<InMemoryTaskRepository>,
}

fn stores() -> Stores {
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let service = CategoryService::new(categories, Arc::clone(&tasks));
    Stores { service, tasks }
}

/// Stores a task carrying the given category name.
///
/// # Errors
///
/// Returns an error if task validation or the store operation fails.
fn seed_categorised_task(
    rt: &Runtime,
    tasks: &InMemoryTaskRepository,
    clock: &DefaultClock,
    user_id: UserId,
    title: &str,
    category: &str,
) -> Result<KanbanTask, Box<dyn std::error::Error + Send + Sync>> {
    let draft = TaskDraft::new(user_id, title).with_category(category);
    let task = KanbanTask::new(draft, clock)?;
    rt.block_on(tasks.store(&task))?;
    Ok(task)
}

/// Tests that deleting a category removes exactly its tasks.
#[rstest]
fn deleting_a_category_removes_its_tasks(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let Stores { service, tasks } = stores();

    let category = rt.block_on(service.create(CategoryDraft::new(user_id, "Fitness".to_owned())))?;
    seed_categorised_task(&rt, tasks.as_ref(), &clock, user_id, "Morning run", "Fitness")?;
    seed_categorised_task(&rt, tasks.as_ref(), &clock, user_id, "Stretching", "Fitness")?;
    seed_categorised_task(&rt, tasks.as_ref(), &clock, user_id, "File taxes", "Finance")?;

    let removed = rt.block_on(service.delete_with_tasks(category.id()))?;
    assert_eq!(removed, 2);

    let remaining = rt.block_on(tasks.list_for_user(user_id))?;
    assert_eq!(titles(&remaining), ["File taxes"]);
    assert!(rt.block_on(service.list_for_user(user_id))?.is_empty());
    Ok(())
}

/// Tests that the cascade only touches the owner's tasks even when another
/// user has a category with the same name.
#[rstest]
fn cascade_is_scoped_to_the_owner(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let Stores { service, tasks } = stores();
    let other_user = UserId::new();

    let mine = rt.block_on(service.create(CategoryDraft::new(user_id, "Fitness".to_owned())))?;
    rt.block_on(service.create(CategoryDraft::new(other_user, "Fitness".to_owned())))?;
    seed_categorised_task(&rt, tasks.as_ref(), &clock, user_id, "Morning run", "Fitness")?;
    seed_categorised_task(&rt, tasks.as_ref(), &clock, other_user, "Evening swim", "Fitness")?;

    let removed = rt.block_on(service.delete_with_tasks(mine.id()))?;
    assert_eq!(removed, 1);

    let theirs = rt.block_on(tasks.list_for_user(other_user))?;
    assert_eq!(titles(&theirs), ["Evening swim"]);
    let their_categories = rt.block_on(service.list_for_user(other_user))?;
    let names: Vec<&str> = their_categories
        .iter()
        .map(|category| category.name().as_str())
        .collect();
    assert_eq!(names, ["Fitness"]);
    Ok(())
}

/// Tests that deleting an empty category removes nothing else.
#[rstest]
fn deleting_an_empty_category_removes_no_tasks(
    runtime: io::Result<Runtime>,
    clock: DefaultClock,
    user_id: UserId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let Stores { service, tasks } = stores();

    let category = rt.block_on(service.create(CategoryDraft::new(user_id, "Someday".to_owned())))?;
    seed_task(&rt, tasks.as_ref(), &clock, user_id, "Uncategorised chore", TaskStatus::Todo, 0.0)?;

    let removed = rt.block_on(service.delete_with_tasks(category.id()))?;
    assert_eq!(removed, 0);

    let remaining = rt.block_on(tasks.list_for_user(user_id))?;
    assert_eq!(titles(&remaining), ["Uncategorised chore"]);
    Ok(())
}
