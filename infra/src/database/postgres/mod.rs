//! PostgreSQL implementations of the core repository traits

pub mod store_repository;
pub mod user_repository;

pub use store_repository::PgStoreRepository;
pub use user_repository::PgUserRepository;

use mg_core::errors::{AuthError, DomainError};

/// SQLSTATE for a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";

/// Map a write error, treating a unique violation on the email column as
/// a registration conflict rather than a storage fault
///
/// The advisory existence check in the service layer races with
/// concurrent writers; the constraint is the authoritative signal.
fn map_write_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return AuthError::EmailAlreadyRegistered.into();
        }
    }
    DomainError::database(err.to_string())
}
