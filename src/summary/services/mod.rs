//! Application services for the summary context.

mod summary;

pub use summary::{SummaryError, SummaryResult, SummaryService};
