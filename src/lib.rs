//! Gantt: personal productivity tracker.
//!
//! This crate provides the core functionality for tracking personal work:
//! kanban task boards, recurring goals, user accounts with sessions, and
//! the notification feed that ties them together.
//!
//! # Architecture
//!
//! Gantt follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`account`]: Users, credentials, and session restore
//! - [`board`]: Kanban tasks, categories, and column projection
//! - [`goal`]: Recurring and measured goals
//! - [`notification`]: Per-user notification feed
//! - [`summary`]: Completion statistics across goals and tasks

pub mod account;
pub mod board;
pub mod goal;
pub mod notification;
pub mod summary;
