//! Render-agnostic projection of the task list.
//!
//! A [`ListView`] is everything a front end needs to draw the list: the rows
//! in display order, the counts, and which of the placeholder or the counts
//! line should be shown. It is rebuilt from the model after every successful
//! operation, so the view never holds state of its own.

use tasklist_model::{Summary, TaskId, TaskListModel};

use crate::locale::Messages;

/// One displayed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Identifier used by the toggle and delete controls.
    pub id: TaskId,
    /// Display text.
    pub text: String,
    /// Whether the toggle control is checked (and the text struck through).
    pub completed: bool,
}

/// Snapshot of everything needed to render the list.
///
/// # Examples
///
/// ```
/// use tasklist_client::locale::Locale;
/// use tasklist_client::view::ListView;
/// use tasklist_model::TaskListModel;
///
/// let mut model = TaskListModel::new();
/// let messages = Locale::En.messages();
///
/// let view = ListView::project(&model, messages);
/// assert_eq!(view.placeholder, Some("no tasks yet — add one"));
/// assert!(view.counts_line.is_none());
///
/// model.add("task1").unwrap();
/// let view = ListView::project(&model, messages);
/// assert!(view.placeholder.is_none());
/// assert_eq!(view.counts_line.as_deref(), Some("Total: 1 | Completed: 0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Rows in display (insertion) order.
    pub rows: Vec<TaskRow>,
    /// Counts derived from the model at projection time.
    pub counts: Summary,
    /// Message shown instead of the list; set only when there are no tasks.
    pub placeholder: Option<&'static str>,
    /// Formatted counts; set only when there is at least one task.
    pub counts_line: Option<String>,
}

impl ListView {
    /// Builds the view for the current model state.
    #[must_use]
    pub fn project(model: &TaskListModel, messages: &'static Messages) -> Self {
        let rows = model
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
            })
            .collect();
        let counts = model.summarize();

        let (placeholder, counts_line) = if counts.total == 0 {
            (Some(messages.empty_list_placeholder), None)
        } else {
            (None, Some(messages.counts_line(counts)))
        };

        Self {
            rows,
            counts,
            placeholder,
            counts_line,
        }
    }

    /// Returns `true` if there are no rows to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
