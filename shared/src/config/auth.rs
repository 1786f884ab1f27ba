//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Default bearer token lifetime: 24 hours
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET` and `JWT_TOKEN_EXPIRY_SECONDS`, falling back
    /// to defaults when unset.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string());
        let token_expiry = std::env::var("JWT_TOKEN_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECONDS);

        Self {
            secret,
            token_expiry,
        }
    }

    /// Set token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.token_expiry = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}
