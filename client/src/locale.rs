//! Localized user-facing strings.
//!
//! Every piece of text a front end shows comes from a [`Messages`] table so
//! both front ends stay word-for-word identical for a given [`Locale`].

use std::fmt;
use std::str::FromStr;

use tasklist_model::Summary;

/// Supported display languages.
///
/// # Examples
///
/// ```
/// use tasklist_client::locale::Locale;
///
/// let locale: Locale = "JA".parse().unwrap();
/// assert_eq!(locale, Locale::Ja);
/// assert_eq!(locale.messages().add_label, "追加");
///
/// assert!("fr".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl Locale {
    /// Returns the message table for this locale.
    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN_MESSAGES,
            Locale::Ja => &JA_MESSAGES,
        }
    }

    /// Short code used on the command line and in the environment.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'en' or 'ja')")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ja" | "japanese" => Ok(Locale::Ja),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

/// Table of user-visible strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Application title.
    pub title: &'static str,
    /// Hint shown in the empty input field.
    pub input_placeholder: &'static str,
    /// Label of the add control.
    pub add_label: &'static str,
    /// Label of the per-task delete control.
    pub delete_label: &'static str,
    /// Notice shown when an empty task is submitted.
    pub empty_text_notice: &'static str,
    /// Shown in place of the list when there are no tasks.
    pub empty_list_placeholder: &'static str,
    /// Label for the total count.
    pub total_label: &'static str,
    /// Label for the completed count.
    pub completed_label: &'static str,
    /// Key hint verb for submitting the input.
    pub hint_add: &'static str,
    /// Key hint verb for moving the selection.
    pub hint_select: &'static str,
    /// Key hint verb for toggling the selected task.
    pub hint_toggle: &'static str,
    /// Key hint verb for deleting the selected task.
    pub hint_delete: &'static str,
    /// Key hint verb for moving focus to the next control.
    pub hint_next: &'static str,
    /// Key hint verb for leaving the application.
    pub hint_quit: &'static str,
    /// Key hint verb for dismissing a notice.
    pub hint_dismiss: &'static str,
}

impl Messages {
    /// Formats the counts line, e.g. `Total: 3 | Completed: 1`.
    #[must_use]
    pub fn counts_line(&self, summary: Summary) -> String {
        format!(
            "{}: {} | {}: {}",
            self.total_label, summary.total, self.completed_label, summary.completed
        )
    }
}

/// English messages.
pub static EN_MESSAGES: Messages = Messages {
    title: "Task List",
    input_placeholder: "Enter a new task...",
    add_label: "Add",
    delete_label: "Delete",
    empty_text_notice: "enter a task",
    empty_list_placeholder: "no tasks yet — add one",
    total_label: "Total",
    completed_label: "Completed",
    hint_add: "add",
    hint_select: "select",
    hint_toggle: "toggle",
    hint_delete: "delete",
    hint_next: "next",
    hint_quit: "quit",
    hint_dismiss: "close",
};

/// Japanese messages.
pub static JA_MESSAGES: Messages = Messages {
    title: "TODOリスト",
    input_placeholder: "新しいタスクを入力...",
    add_label: "追加",
    delete_label: "削除",
    empty_text_notice: "タスクを入力してください",
    empty_list_placeholder: "タスクがありません。新しいタスクを追加してください。",
    total_label: "全タスク",
    completed_label: "完了",
    hint_add: "追加",
    hint_select: "選択",
    hint_toggle: "切替",
    hint_delete: "削除",
    hint_next: "次へ",
    hint_quit: "終了",
    hint_dismiss: "閉じる",
};
