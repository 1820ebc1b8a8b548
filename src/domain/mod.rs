//! Domain value objects and types.
//!
//! Contact names and phone numbers are wrapped in value objects that are
//! validated at construction time, so invalid data cannot be represented
//! once it has entered the address book.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PHONE_LEN};
