//! Versioned on-disk layout of the address book.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of an [`AddressBook`].
///
/// Contacts are stored as a list in the book's iteration order so that
/// insertion order survives a save and reload.
///
/// ```json
/// {
///   "version": 1,
///   "contacts": [
///     { "name": "Bob", "phones": ["0123456789"], "birthday": "15.03.1990" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,

    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl Snapshot {
    /// Rebuild the book, rejecting snapshots from other schema versions.
    pub fn into_book(self) -> StorageResult<AddressBook> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(self.version));
        }
        Ok(self.contacts.into_iter().collect())
    }
}

impl From<&AddressBook> for Snapshot {
    fn from(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts: book.records().cloned().collect(),
        }
    }
}
