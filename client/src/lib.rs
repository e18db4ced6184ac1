//! Tasklist Client - front ends for the task list model.
//!
//! This crate binds user input to a [`TaskListModel`](tasklist_model::TaskListModel)
//! and re-renders the resulting state. Two interchangeable front ends are
//! provided and both render from the same [`view::ListView`] projection, so
//! they show identical behavior:
//!
//! - [`tui`]: a full-screen terminal interface where each frame is drawn from
//!   the current state
//! - [`shell`]: a line-oriented command shell that prints the list after every
//!   successful change
//!
//! # Modules
//!
//! - [`config`]: Configuration from environment variables
//! - [`error`]: Error types for client operations
//! - [`locale`]: Localized user-facing messages
//! - [`logging`]: `tracing` subscriber setup
//! - [`view`]: Render-agnostic projection of the model
//! - [`shell`]: Line-oriented front end
//! - [`tui`]: Terminal user interface

pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod shell;
pub mod tui;
pub mod view;

pub use config::{Config, ConfigError};
pub use error::{ClientError, Result, TuiError};
pub use locale::{Locale, Messages};
pub use shell::Shell;
pub use view::{ListView, TaskRow};
