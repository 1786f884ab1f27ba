//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::value_objects::AccountId;
use crate::errors::{DomainError, TokenError};
use crate::services::clock::{Clock, SystemClock};

use super::config::TokenConfig;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's external identifier
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp, fixed offset from issuance
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into an account identifier
    pub fn account_id(&self) -> Result<AccountId, TokenError> {
        AccountId::parse(&self.sub).map_err(|_| TokenError::Invalid)
    }
}

/// Service issuing and verifying signed bearer tokens
///
/// Stateless: a token is valid iff its HS256 signature checks out against
/// the configured secret and it has not expired. There is no revocation
/// list and no replay protection.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Create a token service using the system clock
    pub fn new(config: TokenConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a token service with an explicit clock
    pub fn with_clock(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Only HS256 is accepted; a token whose header names any other
        // algorithm fails before signature verification. Expiry is
        // checked against the injected clock instead of the library's
        // wall-clock check, with zero leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Issue a signed token for the given account identifier
    #[tracing::instrument(name = "TokenService::issue", skip(self))]
    pub fn issue(&self, account_id: AccountId) -> Result<String, DomainError> {
        let now = self.clock.now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now,
            exp: now + self.config.expiry_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed.into())
    }

    /// Verify a token's algorithm, signature and expiry
    ///
    /// Every failure mode maps to a [`TokenError`]; the API layer
    /// collapses them into a single unauthorized response so no detail
    /// about which check failed leaks to the client.
    #[tracing::instrument(name = "TokenService::verify", skip_all)]
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::InvalidAlgorithm,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Invalid,
            }
        })?;

        // Accept strictly before expiry: now < exp.
        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired.into());
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use chrono::{Duration, TimeZone, Utc};

    fn fixed_service() -> (TokenService, FixedClock) {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        let service = TokenService::with_clock(
            TokenConfig::new("test-secret"),
            Arc::new(clock.clone()),
        );
        (service, clock)
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let (service, _) = fixed_service();
        let account_id = AccountId::generate();

        let token = service.issue(account_id).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.exp - claims.iat, 86400);
        assert_eq!(claims.account_id().unwrap(), account_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let (service, clock) = fixed_service();
        let token = service.issue(AccountId::generate()).unwrap();

        clock.advance(Duration::hours(24));
        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[test]
    fn test_one_second_before_expiry_accepted() {
        let (service, clock) = fixed_service();
        let token = service.issue(AccountId::generate()).unwrap();

        clock.advance(Duration::hours(24) - Duration::seconds(1));
        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn test_exactly_at_expiry_rejected() {
        let (service, clock) = fixed_service();
        let token = service.issue(AccountId::generate()).unwrap();

        clock.advance(Duration::seconds(86400));
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_token_signed_with_other_key_rejected() {
        let (service, _) = fixed_service();
        let other = TokenService::new(TokenConfig::new("different-secret"));

        let token = other.issue(AccountId::generate()).unwrap();
        let err = service.verify(&token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_token_with_other_algorithm_rejected() {
        let (service, _) = fixed_service();
        let account_id = AccountId::generate();

        // Same secret, different HMAC variant in the header.
        let claims = Claims {
            sub: account_id.to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        let err = service.verify(&token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidAlgorithm)
        ));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let (service, _) = fixed_service();
        let err = service.verify("garbage.token").unwrap_err();
        assert!(matches!(err, DomainError::Token(_)));
    }
}
