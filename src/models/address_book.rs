//! The address book: all contacts, keyed by name.

use super::record::Record;
use super::upcoming::{congratulation_date, UpcomingBirthday};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Name-keyed collection of contact records.
///
/// Iteration follows insertion order. Overwriting an existing name keeps
/// that name's original position; deleting closes the gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with that name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Look up a contact. A missing name is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a contact, failing if the name is unknown.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Records in iteration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `horizon_days` days of `today`.
    ///
    /// Results follow the book's iteration order. Contacts without a
    /// birthday are skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: u32) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = congratulation_date(birthday.date(), today, horizon_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
