//! Text command handling.
//!
//! A line of input is parsed once into a [`Command`] and then executed
//! against an explicitly passed [`AddressBook`](crate::models::AddressBook).
//! Every failure is turned into a response string; nothing here is fatal.

pub mod command;
pub mod handler;

pub use command::{Command, EXIT_ACTIONS};
pub use handler::{
    execute, handle_command, Outcome, FAREWELL, GREETING, NO_CONTACTS, UNKNOWN_COMMAND,
};
