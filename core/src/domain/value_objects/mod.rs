//! Validated value objects for account-identifying fields
//!
//! Every type here follows the smart-constructor pattern: the only way to
//! obtain a value is through a constructor that validates the raw input,
//! so an invalid value is never representable. Constructors are pure and
//! return a [`ValidationError`](crate::errors::ValidationError) naming the
//! field on failure.

pub mod account_id;
pub mod account_name;
pub mod address;
pub mod email;
pub mod phone_number;
pub mod prefecture;
pub mod zipcode;

pub use account_id::AccountId;
pub use account_name::AccountName;
pub use address::{City, Street};
pub use email::Email;
pub use phone_number::PhoneNumber;
pub use prefecture::Prefecture;
pub use zipcode::Zipcode;
