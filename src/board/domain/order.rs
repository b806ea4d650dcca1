//! Fractional ordering rank for tasks within a board column.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Position of a task within its column.
///
/// Ranks are persisted as doubles so a client may interleave tasks
/// without renumbering the whole column. Columns are ordered by rank
/// ascending, and comparison uses the IEEE total order so that every
/// stored value, `NaN` included, sorts deterministically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderIndex(f64);

impl OrderIndex {
    /// Creates an order index from a raw rank.
    #[must_use]
    pub const fn new(rank: f64) -> Self {
        Self(rank)
    }

    /// Returns the raw rank value.
    #[must_use]
    pub const fn rank(self) -> f64 {
        self.0
    }
}

impl From<u32> for OrderIndex {
    /// Converts a column position into a rank. Lossless for every `u32`.
    fn from(position: u32) -> Self {
        Self(f64::from(position))
    }
}

impl Default for OrderIndex {
    fn default() -> Self {
        Self(0.0)
    }
}

impl PartialEq for OrderIndex {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for OrderIndex {}

impl PartialOrd for OrderIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for OrderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
