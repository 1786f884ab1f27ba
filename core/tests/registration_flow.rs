//! End-to-end flow over the in-memory repositories: register, sign in,
//! authenticate a token, and look the account back up.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use mg_core::repositories::{MockStoreRepository, MockUserRepository};
use mg_core::services::auth::{
    StoreAuthService, StoreRegistration, UserAuthService, UserRegistration,
};
use mg_core::services::clock::{Clock, FixedClock};
use mg_core::services::token::{TokenConfig, TokenService};
use mg_core::{Account, AuthError, DomainError, TokenError};

fn user_service_at(
    clock: FixedClock,
) -> (UserAuthService<MockUserRepository>, Arc<TokenService>) {
    let clock = Arc::new(clock);
    let repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::with_clock(
        TokenConfig::new("integration-secret"),
        clock.clone(),
    ));
    let service = UserAuthService::with_clock(repository, token_service.clone(), clock);
    (service, token_service)
}

#[tokio::test]
async fn test_user_register_sign_in_and_lookup() {
    let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
    let (service, token_service) = user_service_at(clock.clone());

    let registered = service
        .register(UserRegistration {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    // The issued token resolves back to the new account.
    let claims = token_service.verify(&registered.token).unwrap();
    assert_eq!(claims.account_id().unwrap(), registered.user.user_id);

    // Timestamps come from the injected clock.
    assert_eq!(registered.user.created_at, clock.now());
    assert_eq!(registered.user.updated_at, registered.user.created_at);

    // Signing in later issues a fresh, still-valid token.
    clock.advance(Duration::hours(1));
    let session = service
        .sign_in("alice@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(session.user.user_id, registered.user.user_id);

    let claims = token_service.verify(&session.token).unwrap();
    assert_eq!(claims.account_id().unwrap(), registered.user.user_id);

    // The external id round-trips through lookup.
    let found = service
        .get_by_id(&registered.user.user_id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email.as_str(), "alice@example.com");
}

#[tokio::test]
async fn test_user_token_expires_after_a_day() {
    let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
    let (service, token_service) = user_service_at(clock.clone());

    let registered = service
        .register(UserRegistration {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    clock.advance(Duration::hours(23));
    assert!(token_service.verify(&registered.token).is_ok());

    clock.advance(Duration::hours(1));
    let err = token_service.verify(&registered.token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_store_flow_mirrors_user_flow() {
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ));
    let repository = Arc::new(MockStoreRepository::new());
    let token_service = Arc::new(TokenService::with_clock(
        TokenConfig::new("integration-secret"),
        clock.clone(),
    ));
    let service = StoreAuthService::with_clock(repository, token_service.clone(), clock);

    let registered = service
        .register(StoreRegistration {
            name: "Meguru Coffee".to_string(),
            email: "shop@example.com".to_string(),
            password: "password123".to_string(),
            phone_number: "+81-3-1234-5678".to_string(),
            zipcode: "1500001".to_string(),
            prefecture: "Kyoto".to_string(),
            city: "Sakyo".to_string(),
            street: "1-1 Ginkakuji-cho".to_string(),
        })
        .await
        .unwrap();

    let claims = token_service.verify(&registered.token).unwrap();
    assert_eq!(claims.account_id().unwrap(), registered.store.account_id());

    // A second registration with the same email is refused and the first
    // account keeps working.
    let err = service
        .register(StoreRegistration {
            name: "Copycat".to_string(),
            email: "shop@example.com".to_string(),
            password: "other-password".to_string(),
            phone_number: "0312345678".to_string(),
            zipcode: "150-0001".to_string(),
            prefecture: "Tokyo".to_string(),
            city: "Shibuya".to_string(),
            street: "1-2-3".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));

    let session = service
        .sign_in("shop@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(session.store.store_id, registered.store.store_id);
}
