//! Store registration and sign-in orchestration

use std::sync::Arc;

use crate::domain::entities::{Account, Store};
use crate::domain::value_objects::{AccountId, Email};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::StoreRepository;
use crate::services::auth::{authenticate, StoreDirectory};
use crate::services::clock::{Clock, SystemClock};
use crate::services::password;
use crate::services::token::TokenService;

/// Raw registration input for a store account
#[derive(Debug, Clone)]
pub struct StoreRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub zipcode: String,
    pub prefecture: String,
    pub city: String,
    pub street: String,
}

/// An authenticated store together with its bearer token
#[derive(Debug, Clone)]
pub struct StoreSession {
    pub store: Store,
    pub token: String,
}

/// Orchestrates the store-facing authentication flows
///
/// The flow shape is identical to the user service; only the entity and
/// its field set differ.
pub struct StoreAuthService<R: StoreRepository> {
    repository: Arc<R>,
    directory: StoreDirectory<R>,
    token_service: Arc<TokenService>,
    clock: Arc<dyn Clock>,
}

impl<R: StoreRepository> StoreAuthService<R> {
    /// Create a service using the system clock
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self::with_clock(repository, token_service, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock
    pub fn with_clock(
        repository: Arc<R>,
        token_service: Arc<TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory: StoreDirectory::new(repository.clone()),
            repository,
            token_service,
            clock,
        }
    }

    /// Register a new store
    #[tracing::instrument(name = "StoreAuthService::register", skip_all)]
    pub async fn register(&self, registration: StoreRegistration) -> DomainResult<StoreSession> {
        let email = Email::parse(registration.email.clone())?;

        if self.directory.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = password::hash_password(&registration.password)?;

        let now = self.clock.now();
        let store = Store::new(
            0,
            AccountId::generate(),
            registration.name,
            registration.email,
            password_hash,
            registration.phone_number,
            registration.zipcode,
            &registration.prefecture,
            registration.city,
            registration.street,
            now,
            now,
        )?;

        let store = self.repository.create(store).await?;
        let token = self.token_service.issue(store.account_id())?;

        Ok(StoreSession { store, token })
    }

    /// Sign in with email and password
    #[tracing::instrument(name = "StoreAuthService::sign_in", skip_all)]
    pub async fn sign_in(&self, email: &str, password: &str) -> DomainResult<StoreSession> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let store = self.directory.find_by_email(&email).await?;
        let store = authenticate(store, password)?;

        let token = self.token_service.issue(store.account_id())?;

        Ok(StoreSession { store, token })
    }

    /// Look up a store by its external identifier
    #[tracing::instrument(name = "StoreAuthService::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> DomainResult<Option<Store>> {
        let account_id = AccountId::parse(id)?;
        self.repository.find_by_account_id(account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Prefecture;
    use crate::errors::{DomainError, ValidationError};
    use crate::repositories::MockStoreRepository;
    use crate::services::token::TokenConfig;

    fn service() -> StoreAuthService<MockStoreRepository> {
        let repository = Arc::new(MockStoreRepository::new());
        let token_service = Arc::new(TokenService::new(TokenConfig::new("test-secret")));
        StoreAuthService::new(repository, token_service)
    }

    fn registration() -> StoreRegistration {
        StoreRegistration {
            name: "Meguru Coffee".to_string(),
            email: "shop@example.com".to_string(),
            password: "secret1".to_string(),
            phone_number: "03-1234-5678".to_string(),
            zipcode: "150-0001".to_string(),
            prefecture: "Tokyo".to_string(),
            city: "Shibuya".to_string(),
            street: "1-2-3 Jingumae".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_sign_in_round_trip() {
        let service = service();
        let registered = service.register(registration()).await.unwrap();
        assert_eq!(registered.store.prefecture, Prefecture::Tokyo);

        let session = service
            .sign_in("shop@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(session.store.store_id, registered.store.store_id);
    }

    #[tokio::test]
    async fn test_invalid_address_field_rejected() {
        let service = service();
        let mut input = registration();
        input.zipcode = "12-34".to_string();

        let err = service.register(input).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidFormat { field: "zipcode" })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let service = service();
        service.register(registration()).await.unwrap();

        let err = service.register(registration()).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailAlreadyRegistered)
        ));
    }

    #[tokio::test]
    async fn test_sign_in_failures_share_one_message() {
        let service = service();
        service.register(registration()).await.unwrap();

        let unknown = service
            .sign_in("other@example.com", "secret1")
            .await
            .unwrap_err();
        let mismatch = service
            .sign_in("shop@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }
}
