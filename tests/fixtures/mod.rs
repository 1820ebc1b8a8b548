//! Shared fixtures for integration tests.

use contact_bot::{handle_command, AddressBook, Record};

/// Create a record with the given phones, panicking on invalid input.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(*phone).expect("valid phone");
    }
    record
}

/// An address book seeded with two contacts.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("alice", &["1111111111", "2222222222"]));
    book.add_record(sample_record("bob", &["3333333333"]));
    book
}

/// Run one command and return the response text.
#[allow(dead_code)]
pub fn reply(book: &mut AddressBook, line: &str) -> String {
    handle_command(book, line).message().to_string()
}
