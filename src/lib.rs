//! ContactBot - a command-line address book.
//!
//! Names are stored with one or more ten-digit phone numbers and managed
//! through a small text command language read from standard input.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` trait
//! - **models**: `Record` and `AddressBook`
//! - **commands**: Parsing input lines into `Command`s and executing them
//! - **repl**: The interactive loop over any reader/writer pair
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use commands::{handle_command, Command, Outcome};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::{AddressBook, Record};
