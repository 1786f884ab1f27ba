//! Credential hashing and verification
//!
//! bcrypt with a fresh per-call salt. Hashing two equal passwords yields
//! different digests; equality is only observable through
//! [`verify_password`].

use crate::errors::DomainError;

/// Hash a raw password with bcrypt at the default cost
///
/// The only failure mode is a catastrophic entropy or resource failure,
/// surfaced as an internal error, never as a client error.
pub fn hash_password(raw: &str) -> Result<String, DomainError> {
    bcrypt::hash(raw, bcrypt::DEFAULT_COST)
        .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))
}

/// Verify a raw password against a stored digest
///
/// Mismatches and malformed digests both resolve to `false`; callers
/// cannot tell the cases apart, by contract.
pub fn verify_password(raw: &str, digest: &str) -> bool {
    bcrypt::verify(raw, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_verifies() {
        let digest = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &digest));
    }

    #[test]
    fn test_wrong_password_fails() {
        let digest = hash_password("secret1").unwrap();
        assert!(!verify_password("secret1x", &digest));
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("secret1", &first));
        assert!(verify_password("secret1", &second));
    }

    #[test]
    fn test_malformed_digest_is_not_verified() {
        assert!(!verify_password("secret1", "not-a-bcrypt-digest"));
        assert!(!verify_password("secret1", ""));
    }
}
