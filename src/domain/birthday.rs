//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday entered as `DD.MM.YYYY`.
///
/// The raw text is kept for display, while the parsed calendar date is what
/// the upcoming-birthdays window works with.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.03.1990");
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, parsing the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not two
    /// day digits, two month digits and four year digits separated by dots,
    /// or if it names a date that does not exist (such as `31.02.2000`).
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday as originally entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Field for Birthday {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn raw(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
