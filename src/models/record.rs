//! A single contact in the address book.

use crate::domain::{Birthday, ContactName, Field, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, an ordered list of phones, and an optional birthday.
///
/// Phones keep insertion order and may repeat. Every field is validated
/// when it is set, so a record never holds malformed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::parse(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone, or add one if the contact has none.
    ///
    /// The replacement is positional: whatever number sits at index 0 is
    /// overwritten.
    pub fn edit_phone(&mut self, new_phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::parse(new_phone)?;
        match self.phones.first_mut() {
            Some(first) => *first = phone,
            None => self.phones.push(phone),
        }
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> BookResult<&Phone> {
        self.phones
            .iter()
            .find(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }

    /// Set or overwrite the birthday.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phone: {}",
            self.name,
            self.phones_display()
        )
    }
}
