//! ContactBot - Main entry point
//!
//! Runs the interactive address book on standard input and output.

use anyhow::Result;
use contact_bot::{repl, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the REPL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = repl::run(&mut book, &config, stdin.lock(), &mut stdout) {
        error!("Command loop failed: {}", e);
        return Err(e.into());
    }

    info!(contacts = book.len(), "ContactBot shutdown complete");
    Ok(())
}
