//! Error types for ContactBot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Command errors double as user-facing responses, so their `Display` output is the
//! exact text printed by the REPL.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the record
    #[error("There isn't a phone like the one you provided")]
    PhoneNotFound(String),
}

/// Errors that can occur while executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Invalid format for '{command}' command. Please provide {expected}.")]
    InvalidFormat {
        command: &'static str,
        expected: &'static str,
    },

    /// No contact is filed under the given name
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    /// A record operation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A value object could not be built from user input
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
