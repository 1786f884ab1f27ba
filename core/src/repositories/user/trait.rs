//! User repository trait defining the interface for user persistence

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::value_objects::{AccountId, Email};
use crate::errors::DomainError;

/// Repository contract for [`User`] entities
///
/// Implementations must guarantee that `create` either fully persists a
/// coherent row or fails without a partial write, and that a unique
/// constraint violation on email is reported as
/// [`AuthError::EmailAlreadyRegistered`](crate::errors::AuthError) - the
/// pre-registration duplicate check is only an advisory fast path.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with the storage-assigned row id
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by email
    ///
    /// `Ok(None)` means no such user; it is not an error.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Find a user by external identifier
    async fn find_by_account_id(&self, id: AccountId) -> Result<Option<User>, DomainError>;
}
