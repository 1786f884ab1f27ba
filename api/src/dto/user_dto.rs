//! User endpoint request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use mg_core::domain::entities::User;

/// Body of `POST /api/v1/users/signup`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupUserRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Body of `POST /api/v1/users/signin`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninUserRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Signup/signin response carrying the bearer token and the account view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSessionResponse {
    pub token: String,
    pub user: UserView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::domain::value_objects::AccountId;

    #[test]
    fn test_view_omits_password_hash() {
        let now = Utc::now();
        let user = User::new(
            1,
            AccountId::generate(),
            "Alice",
            "alice@example.com",
            "$2b$12$secret-digest",
            now,
            now,
        )
        .unwrap();

        let json = serde_json::to_string(&UserView::from(&user)).unwrap();
        assert!(!json.contains("secret-digest"));
        assert!(json.contains("alice@example.com"));
    }

    #[test]
    fn test_signup_request_requires_fields() {
        let request = SignupUserRequest {
            name: String::new(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
