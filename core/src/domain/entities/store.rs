//! Store entity representing a registered merchant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;
use crate::domain::value_objects::{
    AccountId, City, Email, PhoneNumber, Prefecture, Street, Zipcode,
};
use crate::errors::ValidationError;

/// A registered store account with its address fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Surrogate row id, 0 until assigned by storage
    pub id: i64,

    /// Immutable external identifier
    pub store_id: AccountId,

    /// Store name (free text, unlike the user display name)
    pub name: String,

    /// Validated email address
    pub email: Email,

    /// Password digest; the raw password is never retained
    pub password_hash: String,

    pub phone_number: PhoneNumber,
    pub zipcode: Zipcode,
    pub prefecture: Prefecture,
    pub city: City,
    pub street: Street,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Store {
    /// Build a store from raw primitive fields
    ///
    /// Field constructors run in a fixed order (email, phone, zipcode,
    /// prefecture, city, street); the first failure aborts construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        store_id: AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        phone_number: impl Into<String>,
        zipcode: impl Into<String>,
        prefecture: &str,
        city: impl Into<String>,
        street: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let email = Email::parse(email)?;
        let phone_number = PhoneNumber::parse(phone_number)?;
        let zipcode = Zipcode::parse(zipcode)?;
        let prefecture = Prefecture::parse(prefecture)?;
        let city = City::parse(city)?;
        let street = Street::parse(street)?;

        Ok(Self {
            id,
            store_id,
            name: name.into(),
            email,
            password_hash: password_hash.into(),
            phone_number,
            zipcode,
            prefecture,
            city,
            street,
            created_at,
            updated_at,
        })
    }
}

impl Account for Store {
    fn account_id(&self) -> AccountId {
        self.store_id
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
