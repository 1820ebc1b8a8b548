//! Command execution against an address book.

use super::command::Command;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};

/// Response printed when the book has no contacts.
pub const NO_CONTACTS: &str = "No contacts found";

/// Response to unrecognized input.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// Response to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Response to the exit family.
pub const FAREWELL: &str = "Good bye!";

/// What the REPL should print, and whether it should keep going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Exit(String),
}

impl Outcome {
    /// The text to show the user.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(msg) | Outcome::Exit(msg) => msg,
        }
    }

    /// Whether the session ends after this response.
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Parse `line`, run it against `book`, and render the response.
///
/// Errors never escape: they are reported back as the response text.
pub fn handle_command(book: &mut AddressBook, line: &str) -> Outcome {
    let result = line
        .parse::<Command>()
        .and_then(|command| execute(book, command));

    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            Outcome::Continue(e.to_string())
        }
    }
}

/// Run a parsed command against `book`.
pub fn execute(book: &mut AddressBook, command: Command) -> CommandResult<Outcome> {
    tracing::debug!(?command, "Executing command");

    let message = match command {
        Command::Add { name, phones } => {
            // Build the whole record first so a bad phone leaves the book untouched.
            let mut record = Record::new(name.as_str())?;
            for phone in phones {
                record.add_phone(phone)?;
            }
            let message = format!(
                "Contact {} added with phones: {}",
                name,
                record.phones_display()
            );
            book.add_record(record);
            message
        }
        Command::Change { name, phone } => {
            let record = book
                .find_mut(&name)
                .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
            // The observed contract: the number is "changed" to itself, which
            // only succeeds when the record already holds it.
            record.edit_phone(&phone, &phone)?;
            format!("Contact {} phone number changed to {}", name, phone)
        }
        Command::Phone { name } => {
            let record = book
                .find(&name)
                .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
            format!("Phone number for {}: {}", name, record.phones_display())
        }
        Command::ShowAll => show_all(book),
        Command::Hello => GREETING.to_string(),
        Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
        Command::Unknown => UNKNOWN_COMMAND.to_string(),
    };

    Ok(Outcome::Continue(message))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
