//! The task list state object.
//!
//! [`TaskListModel`] is the sole piece of mutable state in the system. Front
//! ends own one instance and pass it explicitly to their input handlers; there
//! is no global or shared access.
//!
//! # Example
//!
//! ```
//! use tasklist_model::{TaskListModel, ValidationError};
//!
//! let mut model = TaskListModel::new();
//!
//! let task = model.add("  buy milk  ").unwrap();
//! assert_eq!(task.text, "buy milk");
//! assert!(!task.completed);
//!
//! assert_eq!(model.add("   "), Err(ValidationError::EmptyText));
//!
//! model.toggle(task.id).unwrap();
//! let summary = model.summarize();
//! assert_eq!((summary.total, summary.completed), (1, 1));
//! ```

use chrono::Utc;
use tracing::debug;

use crate::error::{NotFoundError, ValidationError};
use crate::types::{Summary, Task, TaskId};

/// Ordered collection of tasks plus the id allocator.
///
/// Display order is insertion order; no operation reorders tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListModel {
    /// Tasks in insertion order.
    tasks: Vec<Task>,

    /// Raw value of the last id handed out (0 = none yet).
    last_id: u64,
}

impl TaskListModel {
    /// Creates an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task built from user-entered text.
    ///
    /// The text is trimmed before validation and storage. Callers pass the raw
    /// input unchanged; every submission path goes through here so the same
    /// rule applies to all of them.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyText`] if `raw_text` is empty or only
    /// whitespace. The list is left unchanged in that case.
    pub fn add(&mut self, raw_text: &str) -> Result<Task, ValidationError> {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("Rejected task with empty text");
            return Err(ValidationError::EmptyText);
        }

        let task = Task {
            id: self.next_id(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.tasks.push(task.clone());

        debug!(id = %task.id, total = self.tasks.len(), "Task added");
        Ok(task)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns the task as it is after the flip. No other task is touched.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no task has this id.
    pub fn toggle(&mut self, id: TaskId) -> Result<Task, NotFoundError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;

        task.completed = !task.completed;

        debug!(id = %id, completed = task.completed, "Task toggled");
        Ok(task.clone())
    }

    /// Removes the task with the given id, keeping the others in order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no task has this id.
    pub fn remove(&mut self, id: TaskId) -> Result<(), NotFoundError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;

        self.tasks.remove(index);

        debug!(id = %id, total = self.tasks.len(), "Task removed");
        Ok(())
    }

    /// Counts the tasks currently in the list.
    ///
    /// Always computed from the current contents.
    #[must_use]
    pub fn summarize(&self) -> Summary {
        Summary {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }

    /// Returns all tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over tasks in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn next_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId::new(self.last_id)
    }
}

impl<'a> IntoIterator for &'a TaskListModel {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn not_found(id: TaskId) -> NotFoundError {
    debug!(id = %id, "Task not found");
    NotFoundError { id }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(model: &TaskListModel) -> Vec<&str> {
        model.iter().map(|task| task.text.as_str()).collect()
    }

    #[test]
    fn new_model_is_empty() {
        let model = TaskListModel::new();
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
        assert_eq!(model.summarize(), Summary::default());
    }

    #[test]
    fn add_trims_and_appends() {
        let mut model = TaskListModel::new();
        let task = model.add("  hello  ").unwrap();

        assert_eq!(task.text, "hello");
        assert!(!task.completed);
        assert_eq!(model.tasks(), std::slice::from_ref(&task));
    }

    #[test]
    fn add_keeps_inner_whitespace() {
        let mut model = TaskListModel::new();
        let task = model.add("\twash  the car\n").unwrap();
        assert_eq!(task.text, "wash  the car");
    }

    #[test]
    fn add_rejects_whitespace_only_input() {
        let mut model = TaskListModel::new();
        model.add("keep").unwrap();

        for input in ["", " ", "   ", "\t", "\n", " \t\r\n ", "\u{3000}"] {
            assert_eq!(model.add(input), Err(ValidationError::EmptyText), "{input:?}");
        }

        assert_eq!(texts(&model), vec!["keep"]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();
        let b = model.add("b").unwrap();
        let c = model.add("c").unwrap();

        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();
        let b = model.add("b").unwrap();
        model.remove(b.id).unwrap();
        model.remove(a.id).unwrap();

        let c = model.add("c").unwrap();
        assert_ne!(c.id, a.id);
        assert_ne!(c.id, b.id);
        assert!(c.id > b.id);
    }

    #[test]
    fn rejected_add_does_not_consume_an_id() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();
        let _ = model.add("  ");
        let b = model.add("b").unwrap();
        assert_eq!(b.id.get(), a.id.get() + 1);
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();
        let b = model.add("b").unwrap();

        let toggled = model.toggle(a.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.text, "a");
        assert_eq!(toggled.created_at, a.created_at);
        assert_eq!(model.get(b.id), Some(&b));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();

        model.toggle(a.id).unwrap();
        let back = model.toggle(a.id).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();

        let err = model.toggle(TaskId::new(99)).unwrap_err();
        assert_eq!(err.id, TaskId::new(99));
        assert_eq!(model.get(a.id), Some(&a));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut model = TaskListModel::new();
        model.add("one").unwrap();
        let two = model.add("two").unwrap();
        model.add("three").unwrap();

        model.remove(two.id).unwrap();
        assert_eq!(texts(&model), vec!["one", "three"]);
    }

    #[test]
    fn remove_unknown_id_leaves_list_unchanged() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();
        model.remove(a.id).unwrap();

        assert_eq!(model.remove(a.id), Err(NotFoundError { id: a.id }));
        assert!(model.is_empty());
    }

    #[test]
    fn summarize_tracks_every_mutation() {
        let mut model = TaskListModel::new();
        let a = model.add("a").unwrap();
        let b = model.add("b").unwrap();
        assert_eq!(model.summarize(), Summary { total: 2, completed: 0 });

        model.toggle(a.id).unwrap();
        model.toggle(b.id).unwrap();
        assert_eq!(model.summarize(), Summary { total: 2, completed: 2 });

        model.remove(a.id).unwrap();
        assert_eq!(model.summarize(), Summary { total: 1, completed: 1 });

        model.toggle(b.id).unwrap();
        assert_eq!(model.summarize(), Summary { total: 1, completed: 0 });
    }

    #[test]
    fn iterates_by_reference() {
        let mut model = TaskListModel::new();
        model.add("x").unwrap();
        model.add("y").unwrap();

        let mut seen = Vec::new();
        for task in &model {
            seen.push(task.text.clone());
        }
        assert_eq!(seen, vec!["x", "y"]);
    }
}
