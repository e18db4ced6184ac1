//! Error types for task list operations.
//!
//! Two failure kinds exist and neither mutates the list:
//!
//! - [`ValidationError`] - rejected user input, meant to be shown to the user
//! - [`NotFoundError`] - a stale or unknown id, meant to be ignored by the
//!   caller (it signals a caller-side bug, not a user mistake)

use thiserror::Error;

use crate::types::TaskId;

/// Errors raised when input fails validation in [`TaskListModel::add`].
///
/// [`TaskListModel::add`]: crate::TaskListModel::add
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The text was empty or whitespace-only after trimming.
    #[error("task text cannot be empty")]
    EmptyText,
}

/// No task with the given id exists in the list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no task with id {id}")]
pub struct NotFoundError {
    /// The id that was looked up.
    pub id: TaskId,
}
