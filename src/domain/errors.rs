//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// The display text is shown to the user verbatim, so it reads as a
/// sentence rather than a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Name cannot be empty.")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number format.")]
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}
