//! Store signup, signin, and lookup endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use mg_core::repositories::{StoreRepository, UserRepository};
use mg_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{SigninStoreRequest, SignupStoreRequest, StoreSessionResponse, StoreView};
use crate::handlers::{domain_error_response, not_found_response, validation_error_response};
use crate::middleware::AuthContext;

/// Handler for `POST /api/v1/stores/signup`
pub async fn signup<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<SignupStoreRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .store_service
        .register(request.into_inner().into())
        .await
    {
        Ok(session) => {
            tracing::info!(store_id = %session.store.store_id, "store registered");
            HttpResponse::Created().json(ApiResponse::new(StoreSessionResponse {
                token: session.token,
                store: StoreView::from(&session.store),
            }))
        }
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for `POST /api/v1/stores/signin`
pub async fn signin<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<SigninStoreRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .store_service
        .sign_in(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::new(StoreSessionResponse {
            token: session.token,
            store: StoreView::from(&session.store),
        })),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for `GET /api/v1/stores/{store_id}`
pub async fn get_store<U, S>(
    state: web::Data<AppState<U, S>>,
    path: web::Path<String>,
    _auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    match state.store_service.get_by_id(&path).await {
        Ok(Some(store)) => HttpResponse::Ok().json(ApiResponse::new(StoreView::from(&store))),
        Ok(None) => not_found_response("store"),
        Err(err) => domain_error_response(&err),
    }
}
