//! Store repository trait defining the interface for store persistence

use async_trait::async_trait;

use crate::domain::entities::Store;
use crate::domain::value_objects::{AccountId, Email};
use crate::errors::DomainError;

/// Repository contract for [`Store`] entities
///
/// Same persistence guarantees as
/// [`UserRepository`](crate::repositories::UserRepository): atomic
/// creation, `Ok(None)` for absence, and email-uniqueness violations
/// reported as the authoritative conflict signal.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Persist a new store and return it with the storage-assigned row id
    async fn create(&self, store: Store) -> Result<Store, DomainError>;

    /// Find a store by email
    async fn find_by_email(&self, email: &Email) -> Result<Option<Store>, DomainError>;

    /// Find a store by external identifier
    async fn find_by_account_id(&self, id: AccountId) -> Result<Option<Store>, DomainError>;
}
