//! Widgets for the Tasklist TUI.
//!
//! Each widget borrows what it shows from [`AppState`](crate::tui::app::AppState)
//! or a [`ListView`](crate::view::ListView) and implements ratatui's
//! [`Widget`](ratatui::widgets::Widget) trait. None of them holds state.
//!
//! # Widget Catalog
//!
//! - [`header`]: application title bar
//! - [`input_bar`]: text field and add button
//! - [`task_list`]: rows with checkbox, text and delete label, or the placeholder
//! - [`stats_footer`]: counts line and key hints
//! - [`notice`]: modal validation notice

pub mod header;
pub mod input_bar;
pub mod notice;
pub mod stats_footer;
pub mod task_list;

pub use header::{HeaderWidget, HEADER_HEIGHT};
pub use input_bar::{InputBarWidget, INPUT_BAR_HEIGHT};
pub use notice::NoticeWidget;
pub use stats_footer::{StatsFooterWidget, STATS_FOOTER_HEIGHT};
pub use task_list::TaskListWidget;
