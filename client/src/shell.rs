//! Line-oriented front end.
//!
//! The shell reads one command per line, applies it to its
//! [`TaskListModel`], and prints the whole list again after every successful
//! change. It is generic over its input and output streams so it can be
//! driven from stdin/stdout or from in-memory buffers in tests.
//!
//! # Commands
//!
//! | Command | Aliases | Effect |
//! |---------|---------|--------|
//! | `add <text>` | `a` | Add a task |
//! | `toggle <id>` | `t` | Flip a task between pending and completed |
//! | `delete <id>` | `remove`, `rm`, `d` | Delete a task |
//! | `list` | `ls` | Print the list |
//! | `json` | - | Print a JSON snapshot of the list |
//! | `help` | `?` | Print this table |
//! | `quit` | `exit`, `q` | Leave the shell |
//!
//! # Output
//!
//! ```text
//! [ ] 1. buy milk
//! [x] 2. call mom
//! Total: 2 | Completed: 1
//! ```

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use tasklist_model::{Summary, Task, TaskId, TaskListModel};

use crate::error::Result;
use crate::locale::Messages;
use crate::view::ListView;

/// Prefix for the blocking validation notice.
const NOTICE_PREFIX: &str = "! ";

/// Prefix for usage hints.
const HINT_PREFIX: &str = "? ";

/// Command summary printed by `help`.
const HELP_TEXT: &str = "\
commands:
  add <text>      add a task            (a)
  toggle <id>     complete / reopen     (t)
  delete <id>     delete a task         (remove, rm, d)
  list            show the list         (ls)
  json            print a JSON snapshot
  help            show this help        (?)
  quit            leave                 (exit, q)";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task from the raw, untrimmed remainder of the line.
    Add(String),
    /// Toggle the task with this id.
    Toggle(TaskId),
    /// Delete the task with this id.
    Delete(TaskId),
    /// Print the list.
    List,
    /// Print a JSON snapshot.
    Json,
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
    /// Blank line.
    Empty,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The first word is not a known command.
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),

    /// A command that needs an id was given something else.
    #[error("usage: {command} <id>")]
    InvalidId { command: &'static str },
}

impl Command {
    /// Parses one input line.
    ///
    /// The command word is case-insensitive. For `add`, everything after the
    /// command word is kept verbatim (including surrounding whitespace) so
    /// validation happens in the model, not here.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for unknown commands or malformed ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_client::shell::Command;
    /// use tasklist_model::TaskId;
    ///
    /// assert_eq!(Command::parse("add  milk ").unwrap(), Command::Add(" milk ".to_string()));
    /// assert_eq!(Command::parse("T 3").unwrap(), Command::Toggle(TaskId::new(3)));
    /// assert!(Command::parse("toggle three").is_err());
    /// ```
    pub fn parse(line: &str) -> std::result::Result<Self, ParseError> {
        let line = line.trim_start().trim_end_matches(|c: char| c == '\r' || c == '\n');
        if line.trim().is_empty() {
            return Ok(Command::Empty);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "add" | "a" => Ok(Command::Add(rest.to_string())),
            "toggle" | "t" => parse_id(rest, "toggle").map(Command::Toggle),
            "delete" | "remove" | "rm" | "d" => parse_id(rest, "delete").map(Command::Delete),
            "list" | "ls" => Ok(Command::List),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }
}

fn parse_id(arg: &str, command: &'static str) -> std::result::Result<TaskId, ParseError> {
    arg.trim()
        .parse::<u64>()
        .map(TaskId::new)
        .map_err(|_| ParseError::InvalidId { command })
}

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Stop reading.
    Quit,
}

/// JSON snapshot printed by the `json` command.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    tasks: &'a [Task],
    summary: Summary,
}

/// Line-oriented front end over a [`TaskListModel`].
///
/// # Example
///
/// ```
/// use tasklist_client::locale::Locale;
/// use tasklist_client::shell::Shell;
///
/// let input = "add buy milk\ntoggle 1\nquit\n".as_bytes();
/// let mut output = Vec::new();
///
/// let mut shell = Shell::new(input, &mut output, Locale::En.messages());
/// shell.run().unwrap();
/// let model = shell.into_model();
///
/// assert_eq!(model.summarize().completed, 1);
/// let printed = String::from_utf8(output).unwrap();
/// assert!(printed.contains("[x] 1. buy milk"));
/// ```
pub struct Shell<R, W> {
    input: R,
    output: W,
    model: TaskListModel,
    messages: &'static Messages,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with an empty task list.
    pub fn new(input: R, output: W, messages: &'static Messages) -> Self {
        Self {
            input,
            output,
            model: TaskListModel::new(),
            messages,
        }
    }

    /// Returns the model driven by this shell.
    pub fn model(&self) -> &TaskListModel {
        &self.model
    }

    /// Consumes the shell and returns its model.
    pub fn into_model(self) -> TaskListModel {
        self.model
    }

    /// Prints the initial list, then processes lines until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        self.render()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }
            // Invalid UTF-8 becomes U+FFFD and fails to parse like any other bad line.
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        info!(total = self.model.len(), "Shell stopped");
        Ok(())
    }

    /// Parses and executes a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                writeln!(self.output, "{HINT_PREFIX}{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes a parsed command against the model.
    ///
    /// Successful mutations re-print the list. A rejected `add` prints the
    /// notice and changes nothing. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add(raw) => match self.model.add(&raw) {
                Ok(_) => self.render()?,
                Err(_) => {
                    writeln!(
                        self.output,
                        "{NOTICE_PREFIX}{}",
                        self.messages.empty_text_notice
                    )?;
                }
            },
            Command::Toggle(id) => {
                if self.model.toggle(id).is_ok() {
                    self.render()?;
                }
            }
            Command::Delete(id) => {
                if self.model.remove(id).is_ok() {
                    self.render()?;
                }
            }
            Command::List => self.render()?,
            Command::Json => {
                let snapshot = Snapshot {
                    tasks: self.model.tasks(),
                    summary: self.model.summarize(),
                };
                serde_json::to_writer(&mut self.output, &snapshot)?;
                writeln!(self.output)?;
            }
            Command::Help => writeln!(self.output, "{HELP_TEXT}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// Prints the current list view.
    fn render(&mut self) -> Result<()> {
        let view = ListView::project(&self.model, self.messages);
        for row in &view.rows {
            let mark = if row.completed { "[x]" } else { "[ ]" };
            writeln!(self.output, "{mark} {}. {}", row.id, row.text)?;
        }
        if let Some(placeholder) = view.placeholder {
            writeln!(self.output, "{placeholder}")?;
        }
        if let Some(counts) = &view.counts_line {
            writeln!(self.output, "{counts}")?;
        }
        Ok(())
    }
}
