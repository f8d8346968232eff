//! Construction contract shared by contact fields.

use super::errors::ValidationError;
use std::fmt;

/// A validated, immutable contact field.
///
/// Every field is built from the raw text the user typed and remembers that
/// text for display and persistence. A value of an implementing type always
/// satisfies its validation rule.
pub trait Field: Sized + fmt::Display {
    /// Validate `raw` and build the field.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The raw text the field was built from.
    fn raw(&self) -> &str;
}
