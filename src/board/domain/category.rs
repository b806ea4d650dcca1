//! Category aggregate and validated category name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BoardDomainError, CategoryId, HexColor};
use crate::account::domain::UserId;

/// Maximum category name length accepted by the persisted schema.
const MAX_NAME_CHARS: usize = 50;

/// Validated, trimmed category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated category name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCategoryName`] if the value is blank
    /// after trimming, or [`BoardDomainError::CategoryNameTooLong`] if it
    /// exceeds fifty characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyCategoryName);
        }

        let length = trimmed.chars().count();
        if length > MAX_NAME_CHARS {
            return Err(BoardDomainError::CategoryNameTooLong(length));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category aggregate root.
///
/// Categories label tasks per user. Tasks reference them by name rather
/// than identifier, so renaming a category strands its tasks and deleting
/// one cascades over the matching tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    user_id: UserId,
    name: CategoryName,
    color: HexColor,
}

/// Parameter object for creating or replacing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    /// Owner of the category.
    pub user_id: UserId,
    /// Requested display name, validated on construction.
    pub name: String,
    /// Requested hex colour, defaulted when absent.
    pub color: Option<String>,
}

impl CategoryDraft {
    /// Creates a draft with the default colour.
    #[must_use]
    pub const fn new(user_id: UserId, name: String) -> Self {
        Self {
            user_id,
            name,
            color: None,
        }
    }

    /// Sets the requested colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Parameter object for reconstructing a persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCategoryData {
    /// Persisted category identifier.
    pub id: CategoryId,
    /// Persisted owner identifier.
    pub user_id: UserId,
    /// Persisted display name.
    pub name: CategoryName,
    /// Persisted hex colour.
    pub color: HexColor,
}

impl Category {
    /// Creates a new category from a draft.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] if the name or colour fails
    /// validation.
    pub fn new(draft: CategoryDraft) -> Result<Self, BoardDomainError> {
        Self::replacement(CategoryId::new(), draft)
    }

    /// Builds the replacement for an existing category, keeping its
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] if the name or colour fails
    /// validation.
    pub fn replacement(id: CategoryId, draft: CategoryDraft) -> Result<Self, BoardDomainError> {
        let name = CategoryName::new(draft.name)?;
        let color = draft
            .color
            .map_or_else(|| Ok(HexColor::default()), HexColor::new)?;

        Ok(Self {
            id,
            user_id: draft.user_id,
            name,
            color,
        })
    }

    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCategoryData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            name: data.name,
            color: data.color,
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &HexColor {
        &self.color
    }
}
