//! Persistence for the address book.
//!
//! The book is loaded once when a session starts and saved when it ends.
//! Stores hide where and how the snapshot lives; callers only see an
//! [`AddressBook`](crate::models::AddressBook).

mod json_file_store;
mod snapshot;
mod traits;

pub use json_file_store::JsonFileStore;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use traits::AddressBookStore;
