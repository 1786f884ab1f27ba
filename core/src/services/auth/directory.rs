//! Email directory lookups over the repositories
//!
//! The existence check here is an advisory fast path for registration;
//! the storage unique constraint remains the authoritative duplicate
//! signal (see the repository contracts).

use std::sync::Arc;

use crate::domain::entities::{Store, User};
use crate::domain::value_objects::Email;
use crate::errors::DomainError;
use crate::repositories::{StoreRepository, UserRepository};

/// Email-keyed lookups for user accounts
pub struct UserDirectory<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserDirectory<R> {
    /// Create a directory over the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Find a user by email; absence is `Ok(None)`, not an error
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        self.repository.find_by_email(email).await
    }

    /// Whether a user with this email already exists
    pub async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

/// Email-keyed lookups for store accounts
pub struct StoreDirectory<R: StoreRepository> {
    repository: Arc<R>,
}

impl<R: StoreRepository> StoreDirectory<R> {
    /// Create a directory over the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Find a store by email; absence is `Ok(None)`, not an error
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<Store>, DomainError> {
        self.repository.find_by_email(email).await
    }

    /// Whether a store with this email already exists
    pub async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
