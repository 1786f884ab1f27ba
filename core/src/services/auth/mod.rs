//! Registration and sign-in orchestration
//!
//! One service per account kind; the credential-verification step they
//! share is written once against the [`Account`] trait.

pub mod directory;
pub mod store_service;
pub mod user_service;

pub use directory::{StoreDirectory, UserDirectory};
pub use store_service::{StoreAuthService, StoreRegistration, StoreSession};
pub use user_service::{UserAuthService, UserRegistration, UserSession};

use crate::domain::entities::Account;
use crate::errors::{AuthError, DomainError};
use crate::services::password;

/// Resolve a looked-up account against a password attempt
///
/// Absence and password mismatch collapse into the same
/// [`AuthError::InvalidCredentials`] so the two cases are
/// indistinguishable from the outside.
fn authenticate<A: Account>(account: Option<A>, password: &str) -> Result<A, DomainError> {
    let account = account.ok_or(AuthError::InvalidCredentials)?;
    if !password::verify_password(password, account.password_hash()) {
        return Err(AuthError::InvalidCredentials.into());
    }
    Ok(account)
}
