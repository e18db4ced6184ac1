//! Configuration module for the Tasklist client.
//!
//! This module handles parsing configuration from environment variables.
//! Command-line flags, where given, take precedence over these values.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `TASKLIST_LOCALE` | No | `en` | Message language (`en` or `ja`) |
//! | `TASKLIST_LOG_FILE` | No | - | Append logs to this file |
//! | `RUST_LOG` | No | see [`logging`](crate::logging) | Log filter |
//! | `NO_COLOR` | No | - | Monochrome terminal theme |
//!
//! # Example
//!
//! ```no_run
//! use tasklist_client::config::Config;
//!
//! let config = Config::from_env().expect("Failed to load configuration");
//! println!("Locale: {}", config.locale);
//! ```

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;

/// Environment variable selecting the message locale.
pub const LOCALE_ENV: &str = "TASKLIST_LOCALE";

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "TASKLIST_LOG_FILE";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Configuration for the Tasklist client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Language used for every user-visible message.
    pub locale: Locale,

    /// Optional file that receives log output.
    /// If `None`, the shell logs to stderr and the TUI does not log.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `TASKLIST_LOCALE` is set to an unsupported locale
    /// - `TASKLIST_LOG_FILE` is set but empty
    pub fn from_env() -> Result<Self, ConfigError> {
        // Optional: TASKLIST_LOCALE (default: en)
        let locale = match env::var(LOCALE_ENV) {
            Ok(val) => val.parse::<Locale>().map_err(|e| ConfigError::InvalidValue {
                key: LOCALE_ENV.to_string(),
                message: e.to_string(),
            })?,
            Err(_) => Locale::default(),
        };

        // Optional: TASKLIST_LOG_FILE (default: None)
        let log_file = match env::var(LOG_FILE_ENV) {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: LOG_FILE_ENV.to_string(),
                    message: "log file path cannot be empty".to_string(),
                });
            }
            Ok(val) => Some(PathBuf::from(val)),
            Err(_) => None,
        };

        Ok(Self { locale, log_file })
    }

    /// Applies command-line overrides on top of the environment values.
    #[must_use]
    pub fn with_locale_override(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to run tests with isolated environment variables.
    /// Clears all TASKLIST_* vars before the test and restores them after.
    fn with_clean_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let saved_vars: Vec<(String, String)> = env::vars()
            .filter(|(k, _)| k.starts_with("TASKLIST_"))
            .collect();

        for (key, _) in &saved_vars {
            env::remove_var(key);
        }

        let result = f();

        for key in [LOCALE_ENV, LOG_FILE_ENV] {
            env::remove_var(key);
        }
        for (key, value) in saved_vars {
            env::set_var(key, value);
        }

        result
    }

    #[test]
    #[serial]
    fn test_defaults() {
        with_clean_env(|| {
            let config = Config::from_env().expect("should parse empty environment");
            assert_eq!(config, Config::default());
            assert_eq!(config.locale, Locale::En);
            assert!(config.log_file.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_full_config() {
        with_clean_env(|| {
            env::set_var(LOCALE_ENV, "ja");
            env::set_var(LOG_FILE_ENV, "/tmp/tasklist/tasklist.log");

            let config = Config::from_env().expect("should parse full config");
            assert_eq!(config.locale, Locale::Ja);
            assert_eq!(
                config.log_file,
                Some(PathBuf::from("/tmp/tasklist/tasklist.log"))
            );
        });
    }

    #[test]
    #[serial]
    fn test_invalid_locale() {
        with_clean_env(|| {
            env::set_var(LOCALE_ENV, "klingon");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == LOCALE_ENV
            ));
            assert!(err.to_string().contains("klingon"));
        });
    }

    #[test]
    #[serial]
    fn test_empty_log_file_rejected() {
        with_clean_env(|| {
            env::set_var(LOG_FILE_ENV, "  ");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == LOG_FILE_ENV
            ));
        });
    }

    #[test]
    fn test_locale_override() {
        let config = Config::default().with_locale_override(Some(Locale::Ja));
        assert_eq!(config.locale, Locale::Ja);

        let config = config.with_locale_override(None);
        assert_eq!(config.locale, Locale::Ja);
    }
}
