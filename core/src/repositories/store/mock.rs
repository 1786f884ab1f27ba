//! Mock implementation of StoreRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::Store;
use crate::domain::value_objects::{AccountId, Email};
use crate::errors::{AuthError, DomainError};

use super::trait_::StoreRepository;

/// In-memory store repository for tests
#[derive(Clone, Default)]
pub struct MockStoreRepository {
    stores: Arc<RwLock<HashMap<AccountId, Store>>>,
    next_id: Arc<AtomicI64>,
}

impl MockStoreRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            stores: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored stores
    pub async fn len(&self) -> usize {
        self.stores.read().await.len()
    }
}

#[async_trait]
impl StoreRepository for MockStoreRepository {
    async fn create(&self, mut store: Store) -> Result<Store, DomainError> {
        let mut stores = self.stores.write().await;

        if stores.values().any(|s| s.email == store.email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        store.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        stores.insert(store.store_id, store.clone());
        Ok(store)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Store>, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.values().find(|s| &s.email == email).cloned())
    }

    async fn find_by_account_id(&self, id: AccountId) -> Result<Option<Store>, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.get(&id).cloned())
    }
}
