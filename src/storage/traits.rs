//! Storage trait for loading and saving the address book.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::path::PathBuf;

/// Storage for the address book.
///
/// Implementations only need to read and write snapshots; `load` turns
/// every failure into an empty book so a session can always start.
pub trait AddressBookStore {
    /// Read the persisted book.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn try_load(&self) -> StorageResult<Option<AddressBook>>;

    /// Persist the book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Move an unreadable snapshot out of the way so the next save cannot
    /// overwrite it.
    ///
    /// Returns where the snapshot went. Stores with nothing to keep return
    /// `Ok(None)`.
    fn set_aside_unreadable(&self) -> StorageResult<Option<PathBuf>> {
        Ok(None)
    }

    /// Read the persisted book, substituting an empty one when it is
    /// missing or unreadable.
    fn load(&self) -> AddressBook {
        match self.try_load() {
            Ok(Some(book)) => {
                tracing::info!(contacts = book.len(), "Address book loaded");
                book
            }
            Ok(None) => {
                tracing::info!("No saved address book, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved address book is unreadable, starting empty");
                match self.set_aside_unreadable() {
                    Ok(Some(path)) => tracing::warn!(
                        path = %path.display(),
                        "Unreadable address book moved aside"
                    ),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to move unreadable address book aside")
                    }
                }
                AddressBook::new()
            }
        }
    }
}
