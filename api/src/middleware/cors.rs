//! CORS configuration
//!
//! Permissive in development; restricted to the configured origin in
//! production.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use mg_shared::ServerConfig;

/// Build the CORS middleware from server configuration
///
/// A `cors_origin` of `*` allows any origin, which is only appropriate for
/// development; the default origin is `http://localhost:3000`.
pub fn create_cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600);

    if config.cors_origin == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(&config.cors_origin)
    }
}
