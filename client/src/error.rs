//! Error types for the Tasklist client.
//!
//! Model-level failures ([`ValidationError`](tasklist_model::ValidationError)
//! and [`NotFoundError`](tasklist_model::NotFoundError)) are not represented
//! here: front ends handle them in place and never propagate them. The types
//! below cover the surrounding I/O and terminal concerns. Configuration
//! failures are reported by [`ConfigError`](crate::config::ConfigError)
//! before a front end starts.

use thiserror::Error;

/// Errors that can occur while running a front end.
///
/// # Examples
///
/// ```ignore
/// use tasklist_client::error::ClientError;
///
/// fn print_snapshot(model: &TaskListModel) -> Result<(), ClientError> {
///     let json = serde_json::to_string(model.tasks())?;
///     std::io::stdout().write_all(json.as_bytes())?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum ClientError {
    /// Terminal or stream I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TUI-related error.
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors that can occur during TUI operation.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal initialization failed.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// Terminal rendering failed.
    #[error("render error: {0}")]
    Render(#[source] std::io::Error),

    /// Event handling error.
    #[error("event error: {0}")]
    Event(String),
}

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn config_error_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "TASKLIST_LOCALE".to_string(),
            message: "unsupported locale 'fr'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for TASKLIST_LOCALE: unsupported locale 'fr'"
        );
    }

    #[test]
    fn client_error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ClientError = io_err.into();
        assert!(matches!(err, ClientError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn client_error_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn client_error_source_chain() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ClientError = io_err.into();
        assert!(err.source().is_some());
    }

    #[test]
    fn tui_error_terminal_init_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "raw mode failed");
        let err = TuiError::TerminalInit(io_err);
        assert_eq!(
            err.to_string(),
            "failed to initialize terminal: raw mode failed"
        );
    }

    #[test]
    fn tui_error_render_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "write failed");
        let err = TuiError::Render(io_err);
        assert_eq!(err.to_string(), "render error: write failed");
    }

    #[test]
    fn tui_error_event_display() {
        let err = TuiError::Event("poll failed".to_string());
        assert_eq!(err.to_string(), "event error: poll failed");
    }

    #[test]
    fn tui_error_to_client_error_conversion() {
        let err: ClientError = TuiError::Event("x".to_string()).into();
        assert!(matches!(err, ClientError::Tui(_)));
        assert_eq!(err.to_string(), "TUI error: event error: x");
    }
}
