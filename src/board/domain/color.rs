//! Validated hex colour value for categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::BoardDomainError;

/// Default colour assigned to categories created without one.
const DEFAULT_CATEGORY_COLOR: &str = "#E6E6E3";

/// CSS hex colour in `#RGB` or `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Creates a validated hex colour.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidHexColor`] if the value is not a
    /// `#` followed by exactly three or six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let is_valid = trimmed.strip_prefix('#').is_some_and(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        });

        if !is_valid {
            return Err(BoardDomainError::InvalidHexColor(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    /// Returns the neutral grey assigned when no colour is chosen.
    fn default() -> Self {
        Self(DEFAULT_CATEGORY_COLOR.to_owned())
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
