//! Core business logic and domain layer for the Meguru backend
//!
//! This crate contains the domain model (validated value objects and
//! account entities), the repository abstractions, and the services that
//! implement the registration and sign-in flows:
//!
//! - `domain` - value objects and the `User`/`Store` entities
//! - `repositories` - persistence traits and in-memory mocks
//! - `services` - password hashing, token issue/verify, and the
//!   authentication orchestrators
//! - `errors` - the domain error taxonomy

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::entities::{Account, Store, User};
pub use domain::value_objects::{
    AccountId, AccountName, City, Email, PhoneNumber, Prefecture, Street, Zipcode,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{StoreRepository, UserRepository};
