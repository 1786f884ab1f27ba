//! User entity representing a registered end user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;
use crate::domain::value_objects::{AccountId, AccountName, Email};
use crate::errors::ValidationError;

/// A registered user account
///
/// A `User` can only be obtained through [`User::new`], which validates
/// every field; a partially-valid user is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate row id, 0 until assigned by storage
    pub id: i64,

    /// Immutable external identifier
    pub user_id: AccountId,

    /// Validated display name
    pub name: AccountName,

    /// Validated email address
    pub email: Email,

    /// Password digest; the raw password is never retained
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user from raw primitive fields
    ///
    /// Field constructors run in a fixed order (name, email) and the
    /// first failure aborts construction without touching later fields.
    pub fn new(
        id: i64,
        user_id: AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = AccountName::parse(name)?;
        let email = Email::parse(email)?;

        Ok(Self {
            id,
            user_id,
            name,
            email,
            password_hash: password_hash.into(),
            created_at,
            updated_at,
        })
    }
}

impl Account for User {
    fn account_id(&self) -> AccountId {
        self.user_id
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(name: &str, email: &str) -> Result<User, ValidationError> {
        let now = Utc::now();
        User::new(0, AccountId::generate(), name, email, "$2b$12$hash", now, now)
    }

    #[test]
    fn test_valid_fields_build_normalized_user() {
        let user = build("  Alice  ", "a@b.com").unwrap();
        assert_eq!(user.id, 0);
        assert_eq!(user.name.as_str(), "Alice");
        assert_eq!(user.email.as_str(), "a@b.com");
    }

    #[test]
    fn test_invalid_name_aborts_before_email() {
        // Both fields are bad; the name constructor runs first.
        let err = build("x", "not-an-email").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLength { field: "name", .. }));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = build("Alice", "missing-at.example.com").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn test_account_trait_accessors() {
        let user = build("Alice", "a@b.com").unwrap();
        assert_eq!(user.account_id(), user.user_id);
        assert_eq!(user.email().as_str(), "a@b.com");
        assert_eq!(user.password_hash(), "$2b$12$hash");
    }
}
