//! Configuration management for ContactBot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here is required: every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::level_filters::LevelFilter;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for ContactBot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt written before each command is read
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOT_PROMPT`: Prompt text (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        Self::validate_log_level(&log_level)?;

        let prompt =
            env::var("CONTACT_BOT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        Ok(Config { log_level, prompt })
    }

    /// Check that `level` is something `tracing` understands.
    fn validate_log_level(level: &str) -> ConfigResult<()> {
        level
            .parse::<LevelFilter>()
            .map(|_| ())
            .map_err(|_| ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of off, error, warn, info, debug, trace, got: {}",
                    level
                ),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
