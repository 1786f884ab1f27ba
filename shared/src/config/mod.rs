//! Configuration modules for the Meguru server
//!
//! Each configuration type can be built from environment variables
//! (`from_env`) or assembled programmatically with builder helpers.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
