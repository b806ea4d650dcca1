//! Productivity summaries.
//!
//! The summary context reads across the goal and board contexts to
//! answer "how much did I finish, and when". It owns no storage of its
//! own; everything is computed from the repositories it is given.

pub mod services;

#[cfg(test)]
mod tests;
