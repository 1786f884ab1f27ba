//! Bearer token authentication middleware
//!
//! Extracts the token from the `Authorization` header, verifies it with
//! the shared `TokenService`, and injects an [`AuthContext`] into request
//! extensions. Every failure path answers with the same opaque 401 body.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use mg_core::domain::value_objects::AccountId;
use mg_core::services::token::TokenService;
use mg_shared::ErrorResponse;

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// Account identifier from the token's subject claim
    pub account_id: AccountId,
}

/// Middleware factory for bearer token authentication
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Ok(unauthorized(req)),
            };

            let account_id = token_service
                .verify(&token)
                .and_then(|claims| claims.account_id().map_err(Into::into));

            match account_id {
                Ok(account_id) => {
                    req.extensions_mut().insert(AuthContext { account_id });
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(_) => Ok(unauthorized(req)),
            }
        })
    }
}

/// The single 401 body every authentication failure maps to
fn unauthorized<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(
            "authentication_error",
            "invalid or expired token",
        ))
        .map_into_right_body();
    req.into_response(response)
}

fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| actix_web::error::ErrorUnauthorized("authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token-123".to_string()));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }
}
