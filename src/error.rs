//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The display text of book and command errors is what the user sees.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record has no phone with this value
    #[error("Phone number not found.")]
    PhoneNotFound(String),

    /// The book has no contact with this name
    #[error("Contact not found.")]
    ContactNotFound(String),
}

/// Errors produced while executing a single user command.
///
/// None of these end the session; the dispatcher renders them as a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Too few arguments; carries the prompt asking for them
    #[error("{0}")]
    MissingArgument(&'static str),

    /// The named contact does not exist
    #[error("Enter user name.")]
    UnknownContact(String),

    /// An argument was present but unusable
    #[error("{0}")]
    InvalidArgument(String),

    /// A record or book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Errors that can occur while reading or writing the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
