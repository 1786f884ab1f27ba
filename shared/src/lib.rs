//! Shared utilities and common types for the Meguru server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - Common API response and error envelope types

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
