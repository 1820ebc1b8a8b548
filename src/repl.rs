//! The interactive read-eval-print loop.

use crate::commands::handle_command;
use crate::config::Config;
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};

/// Banner printed once when the session starts.
pub const WELCOME: &str = "Welcome to ContactBot!";

/// Run the command loop until an exit command or end of input.
///
/// Blank lines are skipped without a response. I/O errors on either stream
/// end the loop and are returned to the caller.
pub fn run<R, W>(
    book: &mut AddressBook,
    config: &Config,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            tracing::info!("End of input, leaving command loop");
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = handle_command(book, line);
        writeln!(output, "{}", outcome.message())?;
        if outcome.is_exit() {
            break;
        }
    }

    Ok(())
}
