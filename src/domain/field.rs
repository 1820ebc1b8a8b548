//! Field abstraction shared by contact value objects.

use std::fmt;

/// A named value held by a contact record.
///
/// Every field is backed by a string and renders as that string.
pub trait Field: fmt::Display {
    /// Get the field value as a string slice.
    fn value(&self) -> &str;
}
