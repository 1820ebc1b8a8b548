//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name plus its phone numbers in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name the contact is filed under
    name: Name,

    /// Phone numbers, oldest first
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Does nothing if none match.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        tracing::debug!(
            name = %self.name,
            removed = before - self.phones.len(),
            "Removed phones"
        );
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the record is searched, so a malformed
    /// replacement is reported even when `old` is absent.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `new` is not a valid phone
    /// - `RecordError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let new = Phone::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        tracing::debug!(name = %self.name, old = %old, new = %new, "Editing phone");
        *slot = new;
        Ok(())
    }

    /// Find the phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Phones joined with `", "`, as shown to the user.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())
    }
}
