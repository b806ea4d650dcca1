//! `PostgreSQL` repository implementation for goal persistence.

use super::{
    models::{GoalRow, NewGoalRow},
    schema::goals,
};
use crate::account::domain::UserId;
use crate::goal::{
    domain::{Goal, GoalId},
    ports::{GoalRepository, GoalRepositoryError, GoalRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by goal adapters.
pub type GoalPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed goal repository.
#[derive(Debug, Clone)]
pub struct PostgresGoalRepository {
    pool: GoalPgPool,
}

impl PostgresGoalRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GoalPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> GoalRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GoalRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(GoalRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(GoalRepositoryError::persistence)?
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn store(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let goal_id = goal.id();
        let new_row = NewGoalRow::try_from_goal(goal)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(goals::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        GoalRepositoryError::DuplicateGoal(goal_id)
                    }
                    _ => GoalRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, goal: &Goal) -> GoalRepositoryResult<()> {
        let goal_id = goal.id();
        let row = NewGoalRow::try_from_goal(goal)?;

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(goals::table.filter(goals::id.eq(row.id)))
                .set((
                    goals::user_id.eq(row.user_id),
                    goals::title.eq(&row.title),
                    goals::description.eq(&row.description),
                    goals::is_completed.eq(row.is_completed),
                    goals::category.eq(&row.category),
                    goals::frequency.eq(&row.frequency),
                    goals::target_count.eq(row.target_count),
                    goals::current_count.eq(row.current_count),
                    goals::kind.eq(&row.kind),
                    goals::deadline.eq(row.deadline),
                ))
                .execute(connection)
                .map_err(GoalRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(GoalRepositoryError::NotFound(goal_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: GoalId) -> GoalRepositoryResult<Option<Goal>> {
        self.run_blocking(move |connection| {
            let row = goals::table
                .filter(goals::id.eq(id.into_inner()))
                .select(GoalRow::as_select())
                .first::<GoalRow>(connection)
                .optional()
                .map_err(GoalRepositoryError::persistence)?;
            row.map(GoalRow::into_goal).transpose()
        })
        .await
    }

    async fn list_for_user(&self, user_id: UserId) -> GoalRepositoryResult<Vec<Goal>> {
        self.run_blocking(move |connection| {
            let rows = goals::table
                .filter(goals::user_id.eq(user_id.into_inner()))
                .order(goals::created_at.asc())
                .select(GoalRow::as_select())
                .load::<GoalRow>(connection)
                .map_err(GoalRepositoryError::persistence)?;
            rows.into_iter().map(GoalRow::into_goal).collect()
        })
        .await
    }

    async fn delete(&self, id: GoalId) -> GoalRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(goals::table.filter(goals::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(GoalRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(GoalRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}
