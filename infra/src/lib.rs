//! Infrastructure layer for the Meguru backend
//!
//! Provides the PostgreSQL-backed implementations of the core repository
//! traits plus connection pool management. Nothing in this crate contains
//! business rules; it only persists and rehydrates the core entities.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::postgres::{PgStoreRepository, PgUserRepository};

use thiserror::Error;

/// Errors raised while setting up infrastructure components
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection or query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
