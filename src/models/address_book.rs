//! In-memory address book keyed by contact name.

use super::record::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// The collection of contacts, one record per name.
///
/// Entries are always keyed by their record's own name, and iteration
/// yields them in ascending name order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    entries: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any existing contact.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.entries.insert(key, record);
        if let Some(old) = &replaced {
            tracing::debug!(name = %old.name(), "Overwrote existing contact");
        }
        replaced
    }

    /// Look up a contact by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    /// Look up a contact by name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    /// Remove a contact. Does nothing if the name is unknown.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.entries.remove(name);
        tracing::debug!(name = %name, removed = removed.is_some(), "Delete contact");
        removed
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over contacts in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("john", &["1234567890"])).is_none());

        let found = book.find("john").unwrap();
        assert_eq!(found.name().as_str(), "john");
        assert_eq!(found.phones_display(), "1234567890");
        assert!(book.find("jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_silently() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1111111111"]));
        let replaced = book.add_record(record("john", &["2222222222"])).unwrap();

        assert_eq!(replaced.phones_display(), "1111111111");
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("john").unwrap().phones_display(), "2222222222");
    }

    #[test]
    fn test_delete_then_find() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1234567890"]));

        assert!(book.delete("john").is_some());
        assert!(book.find("john").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1234567890"]));
        assert!(book.delete("jane").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_entries_keyed_by_record_name() {
        let mut book = AddressBook::new();
        book.add_record(record("zoe", &[]));
        book.add_record(record("adam", &["1234567890"]));

        for (key, record) in &book.entries {
            assert_eq!(key, record.name().as_str());
        }
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["adam", "zoe"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1111111111"]));
        book.find_mut("john").unwrap().add_phone("2222222222").unwrap();
        assert_eq!(
            book.find("john").unwrap().phones_display(),
            "1111111111, 2222222222"
        );
    }

    #[test]
    fn test_serializes_as_map() {
        let mut book = AddressBook::new();
        book.add_record(record("john", &["1234567890"]));
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "john": { "name": "john", "phones": ["1234567890"] } })
        );
    }
}
