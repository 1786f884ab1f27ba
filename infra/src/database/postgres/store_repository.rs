//! PostgreSQL implementation of the StoreRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use mg_core::domain::entities::Store;
use mg_core::domain::value_objects::{AccountId, Email};
use mg_core::errors::DomainError;
use mg_core::repositories::StoreRepository;

use super::map_write_error;

/// Stores persisted in the `stores` table
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_store(row: &PgRow) -> Result<Store, DomainError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to read id: {}", e)))?;
        let store_id: Uuid = row
            .try_get("store_id")
            .map_err(|e| DomainError::database(format!("failed to read store_id: {}", e)))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| DomainError::database(format!("failed to read name: {}", e)))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| DomainError::database(format!("failed to read email: {}", e)))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| DomainError::database(format!("failed to read password_hash: {}", e)))?;
        let phone_number: String = row
            .try_get("phone_number")
            .map_err(|e| DomainError::database(format!("failed to read phone_number: {}", e)))?;
        let zipcode: String = row
            .try_get("zipcode")
            .map_err(|e| DomainError::database(format!("failed to read zipcode: {}", e)))?;
        let prefecture: String = row
            .try_get("prefecture")
            .map_err(|e| DomainError::database(format!("failed to read prefecture: {}", e)))?;
        let city: String = row
            .try_get("city")
            .map_err(|e| DomainError::database(format!("failed to read city: {}", e)))?;
        let street: String = row
            .try_get("street")
            .map_err(|e| DomainError::database(format!("failed to read street: {}", e)))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| DomainError::database(format!("failed to read created_at: {}", e)))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| DomainError::database(format!("failed to read updated_at: {}", e)))?;

        let store = Store::new(
            id,
            AccountId::from(store_id),
            name,
            email,
            password_hash,
            phone_number,
            zipcode,
            &prefecture,
            city,
            street,
            created_at,
            updated_at,
        )?;
        Ok(store)
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn create(&self, store: Store) -> Result<Store, DomainError> {
        let query = r#"
            INSERT INTO stores (
                store_id, name, email, password_hash,
                phone_number, zipcode, prefecture, city, street,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(store.store_id.as_uuid())
            .bind(&store.name)
            .bind(store.email.as_str())
            .bind(&store.password_hash)
            .bind(store.phone_number.as_str())
            .bind(store.zipcode.as_str())
            .bind(store.prefecture.as_str())
            .bind(store.city.as_str())
            .bind(store.street.as_str())
            .bind(store.created_at)
            .bind(store.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to read id: {}", e)))?;

        Ok(Store { id, ..store })
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Store>, DomainError> {
        let query = r#"
            SELECT id, store_id, name, email, password_hash,
                   phone_number, zipcode, prefecture, city, street,
                   created_at, updated_at
            FROM stores
            WHERE email = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("store lookup failed: {}", e)))?;

        row.as_ref().map(Self::row_to_store).transpose()
    }

    async fn find_by_account_id(&self, id: AccountId) -> Result<Option<Store>, DomainError> {
        let query = r#"
            SELECT id, store_id, name, email, password_hash,
                   phone_number, zipcode, prefecture, city, street,
                   created_at, updated_at
            FROM stores
            WHERE store_id = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("store lookup failed: {}", e)))?;

        row.as_ref().map(Self::row_to_store).transpose()
    }
}
