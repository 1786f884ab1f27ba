//! Application state and route configuration

use std::sync::Arc;

use actix_web::web;

use mg_core::repositories::{StoreRepository, UserRepository};
use mg_core::services::auth::{StoreAuthService, UserAuthService};
use mg_core::services::token::TokenService;

use crate::middleware::auth::JwtAuth;
use crate::routes::{health, stores, users};

/// Shared services injected into every handler
///
/// The token service is not carried here; the auth middleware holds its
/// own handle, wired in by [`configure`].
pub struct AppState<U: UserRepository, S: StoreRepository> {
    pub user_service: Arc<UserAuthService<U>>,
    pub store_service: Arc<StoreAuthService<S>>,
}

impl<U: UserRepository, S: StoreRepository> AppState<U, S> {
    pub fn new(
        user_service: Arc<UserAuthService<U>>,
        store_service: Arc<StoreAuthService<S>>,
    ) -> Self {
        Self {
            user_service,
            store_service,
        }
    }
}

/// Build the route tree for `/api/v1` plus the health endpoint
///
/// Returned as a closure so callers can pass it to `App::configure`
/// both in `main` and in tests.
pub fn configure<U, S>(
    token_service: Arc<TokenService>,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    move |cfg: &mut web::ServiceConfig| {
        cfg.route("/health", web::get().to(health::health_check)).service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("/signup", web::post().to(users::signup::<U, S>))
                        .route("/signin", web::post().to(users::signin::<U, S>))
                        .service(
                            web::resource("/{user_id}")
                                .wrap(JwtAuth::new(token_service.clone()))
                                .route(web::get().to(users::get_user::<U, S>)),
                        ),
                )
                .service(
                    web::scope("/stores")
                        .route("/signup", web::post().to(stores::signup::<U, S>))
                        .route("/signin", web::post().to(stores::signin::<U, S>))
                        .service(
                            web::resource("/{store_id}")
                                .wrap(JwtAuth::new(token_service))
                                .route(web::get().to(stores::get_store::<U, S>)),
                        ),
                ),
        );
    }
}
