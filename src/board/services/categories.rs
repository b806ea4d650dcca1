//! Service layer for category CRUD and cascade deletion.

use crate::account::domain::UserId;
use crate::board::{
    domain::{BoardDomainError, Category, CategoryDraft, CategoryId},
    ports::{CategoryRepository, CategoryRepositoryError, TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for category operations.
#[derive(Debug, Error)]
pub enum CategoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Category repository operation failed.
    #[error(transparent)]
    Repository(#[from] CategoryRepositoryError),
    /// Deleting the category's tasks failed.
    #[error(transparent)]
    Cascade(#[from] TaskRepositoryError),
}

/// Result type for category service operations.
pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Category CRUD service.
///
/// Holds the task repository alongside the category repository because a
/// category delete cascades over the tasks carrying its name.
#[derive(Clone)]
pub struct CategoryService<R, T>
where
    R: CategoryRepository,
    T: TaskRepository,
{
    categories: Arc<R>,
    tasks: Arc<T>,
}

impl<R, T> CategoryService<R, T>
where
    R: CategoryRepository,
    T: TaskRepository,
{
    /// Creates a new category service.
    #[must_use]
    pub const fn new(categories: Arc<R>, tasks: Arc<T>) -> Self {
        Self { categories, tasks }
    }

    /// Creates and stores a category from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError`] when draft validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, draft: CategoryDraft) -> CategoryServiceResult<Category> {
        let category = Category::new(draft)?;
        self.categories.store(&category).await?;
        Ok(category)
    }

    /// Finds a category by identifier.
    ///
    /// Returns `None` when no category matches.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: CategoryId) -> CategoryServiceResult<Option<Category>> {
        Ok(self.categories.find_by_id(id).await?)
    }

    /// Returns all categories owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the listing fails.
    pub async fn list_for_user(&self, user_id: UserId) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.categories.list_for_user(user_id).await?)
    }

    /// Replaces the stored category wholesale, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError`] when the category does not exist,
    /// draft validation fails, or the repository rejects the write.
    pub async fn replace(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> CategoryServiceResult<Category> {
        let existing = self.categories.find_by_id(id).await?;
        if existing.is_none() {
            return Err(CategoryRepositoryError::NotFound(id).into());
        }
        let replacement = Category::replacement(id, draft)?;
        self.categories.update(&replacement).await?;
        Ok(replacement)
    }

    /// Deletes a category together with every task carrying its name.
    ///
    /// The tasks are removed before the category itself; an interrupted
    /// cascade therefore leaves the category in place and never strands
    /// orphaned tasks. Returns the number of tasks removed.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the category does
    /// not exist, or [`CategoryServiceError::Cascade`] when deleting its
    /// tasks fails; in the latter case the category is left in place.
    pub async fn delete_with_tasks(&self, id: CategoryId) -> CategoryServiceResult<usize> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or(CategoryRepositoryError::NotFound(id))?;

        let removed = self
            .tasks
            .delete_by_category(category.user_id(), category.name().as_str())
            .await?;
        self.categories.delete(id).await?;
        Ok(removed)
    }
}
