//! PostgreSQL connection pool management
//!
//! Wraps the SQLx pool with configuration, health checks, and schema
//! migrations so the rest of the application never touches pool options
//! directly.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;
use tracing::log::LevelFilter;

use mg_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// PostgreSQL connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let connect_options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await?;

        tracing::info!("database connection pool ready");

        Ok(Self { pool })
    }

    /// The underlying SQLx pool, for building repositories
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify connectivity with a trivial query
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Close all connections, for graceful shutdown
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
