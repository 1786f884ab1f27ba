//! HTTP API layer for the Meguru backend
//!
//! Exposes the registration, sign-in, and lookup flows over HTTP:
//!
//! - `dto` - request/response shapes with input validation
//! - `handlers` - domain error to HTTP status mapping
//! - `middleware` - bearer token authentication and CORS
//! - `routes` - endpoint handlers and route wiring
//! - `app` - application state and route configuration

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::AppState;
