//! Contact Book - a command-line personal address book.
//!
//! Stores names, phone numbers and birthdays, persists them between runs,
//! and reports whose birthday is coming up in the next few days.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: Contact records, the address book, and the birthday window
//! - **storage**: Loading and saving the book as a JSON snapshot
//! - **commands**: Parsing and executing user commands
//! - **session**: The interactive read-eval-print loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use commands::{dispatch, Command, CommandContext, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use session::Session;
pub use storage::{AddressBookStore, JsonFileStore};
