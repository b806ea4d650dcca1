//! `PostgreSQL` repository implementations for board persistence.

use super::{
    models::{CategoryRow, NewCategoryRow, NewTaskRow, TaskRow},
    schema::{categories, kanban_tasks},
};
use crate::account::domain::UserId;
use crate::board::{
    domain::{Category, CategoryId, KanbanTask, TaskId},
    ports::{
        CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed kanban task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &KanbanTask) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = NewTaskRow::from_task(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(kanban_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &KanbanTask) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = NewTaskRow::from_task(task);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                kanban_tasks::table.filter(kanban_tasks::id.eq(row.id)),
            )
            .set((
                kanban_tasks::user_id.eq(row.user_id),
                kanban_tasks::title.eq(&row.title),
                kanban_tasks::description.eq(&row.description),
                kanban_tasks::priority.eq(&row.priority),
                kanban_tasks::status.eq(&row.status),
                kanban_tasks::color.eq(&row.color),
                kanban_tasks::category.eq(&row.category),
                kanban_tasks::deadline.eq(row.deadline),
                kanban_tasks::order_index.eq(row.order_index),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<KanbanTask>> {
        self.run_blocking(move |connection| {
            let row = kanban_tasks::table
                .filter(kanban_tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(TaskRow::into_task).transpose()
        })
        .await
    }

    async fn list_for_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<KanbanTask>> {
        self.run_blocking(move |connection| {
            let rows = kanban_tasks::table
                .filter(kanban_tasks::user_id.eq(user_id.into_inner()))
                .order(kanban_tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(TaskRow::into_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(kanban_tasks::table.filter(kanban_tasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> TaskRepositoryResult<usize> {
        let category_name = category.to_owned();
        self.run_blocking(move |connection| {
            diesel::delete(
                kanban_tasks::table
                    .filter(kanban_tasks::user_id.eq(user_id.into_inner()))
                    .filter(kanban_tasks::category.eq(&category_name)),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// `PostgreSQL`-backed category repository.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: BoardPgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CategoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CategoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CategoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CategoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let category_id = category.id();
        let new_row = NewCategoryRow::from_category(category);

        self.run_blocking(move |connection| {
            diesel::insert_into(categories::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CategoryRepositoryError::DuplicateCategory(category_id)
                    }
                    _ => CategoryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let category_id = category.id();
        let row = NewCategoryRow::from_category(category);

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(categories::table.filter(categories::id.eq(row.id)))
                    .set((
                        categories::user_id.eq(row.user_id),
                        categories::name.eq(&row.name),
                        categories::color.eq(&row.color),
                    ))
                    .execute(connection)
                    .map_err(CategoryRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(CategoryRepositoryError::NotFound(category_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::id.eq(id.into_inner()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(CategoryRepositoryError::persistence)?;
            row.map(CategoryRow::into_category).transpose()
        })
        .await
    }

    async fn list_for_user(&self, user_id: UserId) -> CategoryRepositoryResult<Vec<Category>> {
        self.run_blocking(move |connection| {
            let rows = categories::table
                .filter(categories::user_id.eq(user_id.into_inner()))
                .order(categories::name.asc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(connection)
                .map_err(CategoryRepositoryError::persistence)?;
            rows.into_iter().map(CategoryRow::into_category).collect()
        })
        .await
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(categories::table.filter(categories::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(CategoryRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(CategoryRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}
