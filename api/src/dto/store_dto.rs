//! Store endpoint request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use mg_core::domain::entities::Store;
use mg_core::services::auth::StoreRegistration;

/// Body of `POST /api/v1/stores/signup`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupStoreRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "zipcode is required"))]
    pub zipcode: String,

    #[validate(length(min = 1, message = "prefecture is required"))]
    pub prefecture: String,

    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
}

impl From<SignupStoreRequest> for StoreRegistration {
    fn from(request: SignupStoreRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
            phone_number: request.phone_number,
            zipcode: request.zipcode,
            prefecture: request.prefecture,
            city: request.city,
            street: request.street,
        }
    }
}

/// Body of `POST /api/v1/stores/signin`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninStoreRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Public view of a store account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreView {
    pub store_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub zipcode: String,
    pub prefecture: String,
    pub city: String,
    pub street: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Store> for StoreView {
    fn from(store: &Store) -> Self {
        Self {
            store_id: store.store_id.to_string(),
            name: store.name.clone(),
            email: store.email.as_str().to_string(),
            phone_number: store.phone_number.as_str().to_string(),
            zipcode: store.zipcode.as_str().to_string(),
            prefecture: store.prefecture.as_str().to_string(),
            city: store.city.as_str().to_string(),
            street: store.street.as_str().to_string(),
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

/// Signup/signin response carrying the bearer token and the store view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSessionResponse {
    pub token: String,
    pub store: StoreView,
}
