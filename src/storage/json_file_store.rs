//! JSON file implementation of the address book store.

use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::storage::snapshot::Snapshot;
use crate::storage::traits::AddressBookStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Address book store backed by a pretty-printed JSON file.
///
/// Saving writes a sibling temporary file and renames it over the target,
/// so an interrupted save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A sibling of the book file with `suffix` appended to its name.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    /// First of `book.json.corrupt`, `book.json.corrupt.1`, ... not yet taken.
    fn corrupt_path(&self) -> PathBuf {
        let mut candidate = self.sibling(".corrupt");
        let mut n = 1;
        while candidate.exists() {
            candidate = self.sibling(&format!(".corrupt.{}", n));
            n += 1;
        }
        candidate
    }
}

impl AddressBookStore for JsonFileStore {
    fn try_load(&self) -> StorageResult<Option<AddressBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        snapshot.into_book().map(Some)
    }

    fn set_aside_unreadable(&self) -> StorageResult<Option<PathBuf>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let target = self.corrupt_path();
        fs::rename(&self.path, &target)?;
        Ok(Some(target))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&Snapshot::from(book))?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::info!(
            contacts = book.len(),
            path = %self.path.display(),
            "Address book saved"
        );
        Ok(())
    }
}
