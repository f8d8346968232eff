//! Contact Book - Main entry point
//!
//! Runs the interactive address book assistant on stdin/stdout.

use anyhow::Result;
use contact_book::{Config, JsonFileStore, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout stays the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book file: {}", config.data_file.display());

    let store = JsonFileStore::new(&config.data_file);
    let mut session = Session::new(store, config.birthday_horizon_days);

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())?;

    info!("Session finished");
    Ok(())
}
