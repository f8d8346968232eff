//! Interactive read-eval-print loop.
//!
//! A session owns the address book for its lifetime: it loads the book
//! from the store when created, answers one command per input line, and
//! saves the book when the user exits or the input ends.

use crate::commands::{dispatch, parse_input, CommandContext, Reply};
use crate::error::CommandError;
use crate::models::AddressBook;
use crate::storage::AddressBookStore;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

/// One interactive conversation over an address book.
pub struct Session<S: AddressBookStore> {
    store: S,
    book: AddressBook,
    horizon_days: u32,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl<S: AddressBookStore> Session<S> {
    /// Start a session, loading the book from `store`.
    ///
    /// Birthday windows start from the local calendar date.
    pub fn new(store: S, horizon_days: u32) -> Self {
        let book = store.load();
        Self {
            store,
            book,
            horizon_days,
            today: Box::new(|| chrono::Local::now().date_naive()),
        }
    }

    /// Use a different source for "today".
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle a single line of input.
    ///
    /// Returns `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (word, args) = parse_input(line)?;
        let ctx = CommandContext::new((self.today)()).with_horizon_days(self.horizon_days);
        Some(dispatch(&word, &args, &mut self.book, &ctx))
    }

    /// Save the book, logging rather than returning failures.
    ///
    /// The in-memory book is unaffected by a failed save.
    pub fn save(&self) {
        if let Err(e) = self.store.save(&self.book) {
            tracing::error!(error = %e, "Failed to save address book");
        }
    }

    /// Converse until `exit`/`close` or end of input, then save.
    ///
    /// The book is saved on every way out of the loop, including I/O
    /// failures on either stream; such a failure is returned afterwards.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> io::Result<()> {
        let result = self.converse(input, output);
        if let Err(e) = &result {
            tracing::error!(error = %e, "Session stream failed");
        }
        self.save();
        result
    }

    fn converse<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("Input closed");
                writeln!(output)?;
                return Ok(());
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring input line that is not valid UTF-8");
                    let line = String::from_utf8_lossy(&buf).trim_end().to_string();
                    Some(Reply::Message(CommandError::UnknownCommand(line).to_string()))
                }
            };

            match reply {
                Some(Reply::Message(text)) => writeln!(output, "{}", text)?,
                Some(Reply::Exit(text)) => {
                    writeln!(output, "{}", text)?;
                    return Ok(());
                }
                None => {}
            }
        }
    }
}
