//! Address book data model.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::AddressBook;
pub use record::Record;
pub use upcoming::{congratulation_date, next_weekday, UpcomingBirthday, DEFAULT_HORIZON_DAYS};
