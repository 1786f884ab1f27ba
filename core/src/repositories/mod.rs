//! Repository traits and in-memory mock implementations
//!
//! These traits define the persistence contract between the domain and
//! the infrastructure layer. Absence is modeled as `Ok(None)`, never as
//! an error; storage failures propagate as `DomainError::Database`.

pub mod store;
pub mod user;

pub use store::{MockStoreRepository, StoreRepository};
pub use user::{MockUserRepository, UserRepository};
