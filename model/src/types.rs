//! Task record types for the task list model.
//!
//! All serializable types use camelCase JSON field names.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identifier of a task within a single [`TaskListModel`](crate::TaskListModel).
///
/// Identifiers are allocated from a per-model counter that only ever moves
/// forward, so an id is never handed out twice by the same model, even after
/// the task holding it has been removed.
///
/// # Examples
///
/// ```
/// use tasklist_model::TaskId;
///
/// let id = TaskId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    ///
    /// Front ends use this to turn user-typed ids back into a `TaskId`; an id
    /// that does not belong to any task simply yields a
    /// [`NotFoundError`](crate::NotFoundError) from the model.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do record.
///
/// Tasks are only created by [`TaskListModel::add`](crate::TaskListModel::add),
/// which guarantees `text` is trimmed and non-empty. The only field that ever
/// changes afterwards is `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the owning model.
    pub id: TaskId,

    /// Trimmed, non-empty display text.
    pub text: String,

    /// Whether the task has been marked done.
    pub completed: bool,

    /// When the task was added.
    pub created_at: DateTime<Utc>,
}

/// Counts derived from the current contents of a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of tasks in the list.
    pub total: usize,

    /// Number of tasks with `completed == true`.
    pub completed: usize,
}
