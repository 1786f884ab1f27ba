//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::value_objects::{AccountId, Email};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// In-memory user repository for tests
///
/// Enforces email uniqueness at insert like the real store, so the
/// constraint-violation conflict path is exercised without a database.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<AccountId, User>>>,
    next_id: Arc<AtomicI64>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.email == email).cloned())
    }

    async fn find_by_account_id(&self, id: AccountId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}
