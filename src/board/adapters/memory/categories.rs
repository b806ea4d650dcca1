//! In-memory category repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::board::{
    domain::{Category, CategoryId},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<InMemoryCategoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryCategoryState {
    categories: HashMap<CategoryId, Category>,
    user_index: HashMap<UserId, Vec<CategoryId>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.categories.contains_key(&category.id()) {
            return Err(CategoryRepositoryError::DuplicateCategory(category.id()));
        }

        state
            .user_index
            .entry(category.user_id())
            .or_default()
            .push(category.id());
        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let old_owner = state
            .categories
            .get(&category.id())
            .ok_or(CategoryRepositoryError::NotFound(category.id()))?
            .user_id();

        // A replacement may reassign the category to another user.
        if old_owner != category.user_id() {
            if let Some(ids) = state.user_index.get_mut(&old_owner) {
                ids.retain(|candidate| *candidate != category.id());
                if ids.is_empty() {
                    state.user_index.remove(&old_owner);
                }
            }
            state
                .user_index
                .entry(category.user_id())
                .or_default()
                .push(category.id());
        }

        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.categories.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: UserId) -> CategoryRepositoryResult<Vec<Category>> {
        let state = self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut categories: Vec<Category> = state
            .user_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.categories.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        // Categories carry no creation timestamp, so name order is the
        // listing contract shared with the database adapter.
        categories.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(categories)
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let category = state
            .categories
            .remove(&id)
            .ok_or(CategoryRepositoryError::NotFound(id))?;
        if let Some(ids) = state.user_index.get_mut(&category.user_id()) {
            ids.retain(|candidate| *candidate != id);
            if ids.is_empty() {
                state.user_index.remove(&category.user_id());
            }
        }
        Ok(())
    }
}
