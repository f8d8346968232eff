//! User commands for the address book assistant.
//!
//! A line of input is split into a command word and its arguments,
//! executed against the book, and turned into a single reply. Every
//! failure is rendered into the reply here; nothing escapes a command.

mod command;
mod handlers;

pub use command::Command;

use crate::error::CommandResult;
use crate::models::{AddressBook, DEFAULT_HORIZON_DAYS};
use chrono::NaiveDate;

/// Values a command needs besides the book and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// The date birthday windows start from.
    pub today: NaiveDate,
    /// Window length used when `birthdays` gets no argument.
    pub horizon_days: u32,
}

impl CommandContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }
}

/// Result of one user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading commands.
    Message(String),
    /// Show the text, persist the book, and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

/// Split a line into a lowercased command word and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// Run one command and render its outcome, success or failure, as a reply.
pub fn dispatch(
    word: &str,
    args: &[&str],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> Reply {
    tracing::debug!(command = word, args = args.len(), "Dispatching command");

    let result: CommandResult<Reply> = word
        .parse::<Command>()
        .and_then(|command| handlers::execute(command, args, book, ctx));

    match result {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(command = word, error = ?e, "Command failed");
            Reply::Message(e.to_string())
        }
    }
}
