//! User signup, signin, and lookup endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use mg_core::repositories::{StoreRepository, UserRepository};
use mg_core::services::auth::UserRegistration;
use mg_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{SigninUserRequest, SignupUserRequest, UserSessionResponse, UserView};
use crate::handlers::{domain_error_response, not_found_response, validation_error_response};
use crate::middleware::AuthContext;

/// Handler for `POST /api/v1/users/signup`
pub async fn signup<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<SignupUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let registration = UserRegistration {
        name: request.name,
        email: request.email,
        password: request.password,
    };

    match state.user_service.register(registration).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.user_id, "user registered");
            HttpResponse::Created().json(ApiResponse::new(UserSessionResponse {
                token: session.token,
                user: UserView::from(&session.user),
            }))
        }
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for `POST /api/v1/users/signin`
pub async fn signin<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<SigninUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .user_service
        .sign_in(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::new(UserSessionResponse {
            token: session.token,
            user: UserView::from(&session.user),
        })),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for `GET /api/v1/users/{user_id}`
///
/// Requires a valid bearer token; any authenticated account may look up
/// any user by external id.
pub async fn get_user<U, S>(
    state: web::Data<AppState<U, S>>,
    path: web::Path<String>,
    _auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: StoreRepository + 'static,
{
    match state.user_service.get_by_id(&path).await {
        Ok(Some(user)) => HttpResponse::Ok().json(ApiResponse::new(UserView::from(&user))),
        Ok(None) => not_found_response("user"),
        Err(err) => domain_error_response(&err),
    }
}
