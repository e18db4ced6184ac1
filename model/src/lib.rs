//! Tasklist Model - ordered task list state and transitions.
//!
//! This crate holds the only stateful logic of the task list: an ordered
//! collection of [`Task`] records and the four operations that act on it.
//! It has no dependency on any rendering layer; front ends own a
//! [`TaskListModel`] and re-render from it after every successful operation.
//!
//! # Operations
//!
//! | Operation | Success | Failure |
//! |-----------|---------|---------|
//! | [`TaskListModel::add`] | appends a new pending task | [`ValidationError::EmptyText`] |
//! | [`TaskListModel::toggle`] | flips `completed` | [`NotFoundError`] |
//! | [`TaskListModel::remove`] | removes the task | [`NotFoundError`] |
//! | [`TaskListModel::summarize`] | total/completed counts | - |
//!
//! Failed operations never mutate the list.
//!
//! # Modules
//!
//! - [`types`]: Task records, identifiers and summaries
//! - [`model`]: The task list state object
//! - [`error`]: Error types for model operations

pub mod error;
pub mod model;
pub mod types;

pub use error::{NotFoundError, ValidationError};
pub use model::TaskListModel;
pub use types::{Summary, Task, TaskId};
