//! Meguru API server entry point
//!
//! Wires configuration, the database pool, repositories, and services
//! together and starts the HTTP server.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use mg_api::app::{configure, AppState};
use mg_api::middleware::cors::create_cors;
use mg_core::services::auth::{StoreAuthService, UserAuthService};
use mg_core::services::token::{TokenConfig, TokenService};
use mg_infra::database::connection::DatabasePool;
use mg_infra::database::postgres::{PgStoreRepository, PgUserRepository};
use mg_shared::config::{DatabaseConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();

    if jwt_config.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the insecure default secret");
    }

    let pool = DatabasePool::new(database_config).await?;
    pool.run_migrations().await?;

    let user_repository = Arc::new(PgUserRepository::new(pool.pool().clone()));
    let store_repository = Arc::new(PgStoreRepository::new(pool.pool().clone()));

    let token_service = Arc::new(TokenService::new(TokenConfig::from(jwt_config)));
    let user_service = Arc::new(UserAuthService::new(
        user_repository,
        token_service.clone(),
    ));
    let store_service = Arc::new(StoreAuthService::new(
        store_repository,
        token_service.clone(),
    ));

    let bind_address = server_config.bind_address();
    let workers = server_config.worker_count();
    tracing::info!(%bind_address, "starting meguru api server");

    let cors_config = server_config.clone();
    HttpServer::new(move || {
        let state = AppState::new(user_service.clone(), store_service.clone());

        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors(&cors_config))
            .app_data(web::Data::new(state))
            .configure(configure::<PgUserRepository, PgStoreRepository>(
                token_service.clone(),
            ))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await?;

    pool.close().await;

    Ok(())
}
