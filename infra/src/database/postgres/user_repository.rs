//! PostgreSQL implementation of the UserRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use mg_core::domain::entities::User;
use mg_core::domain::value_objects::{AccountId, Email};
use mg_core::errors::DomainError;
use mg_core::repositories::UserRepository;

use super::map_write_error;

/// Users persisted in the `users` table
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Rehydrate a user entity from a database row
    ///
    /// Rows go back through [`User::new`] so a corrupted row surfaces as
    /// an error instead of an invalid entity.
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to read id: {}", e)))?;
        let user_id: Uuid = row
            .try_get("user_id")
            .map_err(|e| DomainError::database(format!("failed to read user_id: {}", e)))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| DomainError::database(format!("failed to read name: {}", e)))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| DomainError::database(format!("failed to read email: {}", e)))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| DomainError::database(format!("failed to read password_hash: {}", e)))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| DomainError::database(format!("failed to read created_at: {}", e)))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| DomainError::database(format!("failed to read updated_at: {}", e)))?;

        let user = User::new(
            id,
            AccountId::from(user_id),
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        )?;
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (user_id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(user.user_id.as_uuid())
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to read id: {}", e)))?;

        Ok(User { id, ..user })
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("user lookup failed: {}", e)))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_account_id(&self, id: AccountId) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE user_id = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("user lookup failed: {}", e)))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}
