//! Domain error to HTTP response mapping
//!
//! One place decides the status code and body for every `DomainError`,
//! so handlers never build error responses ad hoc. Authentication and
//! token failures collapse to a single opaque 401 body; storage faults
//! are logged but never echoed to the client.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use mg_core::errors::{AuthError, DomainError};
use mg_shared::ErrorResponse;

/// Message returned for every token failure, regardless of cause
const INVALID_TOKEN_MESSAGE: &str = "invalid or expired token";

/// Map a domain error to its HTTP response
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation(e) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", e.to_string()))
        }
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("registration_error", err.to_string())),
        DomainError::Auth(AuthError::InvalidCredentials) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("authentication_error", err.to_string())),
        DomainError::Token(_) => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "authentication_error",
            INVALID_TOKEN_MESSAGE,
        )),
        DomainError::Database { message } | DomainError::Internal { message } => {
            tracing::error!(error = %message, "request failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "an internal error occurred",
            ))
        }
    }
}

/// Map request-body validation failures to a 400 response
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ");

    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
}

/// 404 for a lookup that resolved to no account
pub fn not_found_response(entity: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        format!("{} not found", entity),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::errors::{TokenError, ValidationError};

    #[test]
    fn test_validation_maps_to_400() {
        let err = DomainError::from(ValidationError::InvalidEmail);
        let response = domain_error_response(&err);
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credentials_map_to_401() {
        let err = DomainError::from(AuthError::InvalidCredentials);
        let response = domain_error_response(&err);
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_every_token_failure_maps_to_one_401() {
        for err in [
            TokenError::Expired,
            TokenError::Invalid,
            TokenError::InvalidSignature,
            TokenError::InvalidAlgorithm,
        ] {
            let response = domain_error_response(&DomainError::from(err));
            assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_storage_fault_maps_to_500() {
        let err = DomainError::database("connection refused");
        let response = domain_error_response(&err);
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
