//! Configuration for the token service

use mg_shared::config::JwtConfig;

/// Token lifetime: 24 hours from issuance
pub const TOKEN_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Configuration for the token service
///
/// The signing secret is injected here at construction time; there is no
/// module-level key. Rotating the secret invalidates every outstanding
/// token, which is acceptable since no revocation list exists anyway.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret shared by issuer and verifier
    pub secret: String,

    /// Token expiry in seconds after issuance
    pub expiry_seconds: i64,
}

impl TokenConfig {
    /// Create a configuration with the default 24 hour lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_seconds: TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl From<JwtConfig> for TokenConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            expiry_seconds: config.token_expiry,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new("development-secret-please-change-in-production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_is_24_hours() {
        assert_eq!(TokenConfig::default().expiry_seconds, 86400);
    }

    #[test]
    fn test_from_shared_jwt_config() {
        let shared = JwtConfig::new("s3cret").with_expiry_hours(2);
        let config = TokenConfig::from(shared);
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.expiry_seconds, 7200);
    }
}
