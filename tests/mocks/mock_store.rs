use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::storage::AddressBookStore;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book store for testing.
///
/// Keeps the "persisted" book in memory, can be told to fail on load or
/// save, and tracks method calls for verification. Clones share state, so
/// a test can hand one clone to a session and inspect the other.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStore {
    saved: Arc<Mutex<Option<AddressBook>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStore {
    /// Create a store with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(book);
        store
    }

    /// Make every load report a corrupt snapshot.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// Make every save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_save.lock().unwrap() = true;
    }

    /// The last successfully saved book.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookStore for MockStore {
    fn try_load(&self) -> StorageResult<Option<AddressBook>> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::UnsupportedVersion(0));
        }
        Ok(self.saved())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
