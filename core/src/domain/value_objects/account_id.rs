//! External account identifier value object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// The opaque external identifier of an account
///
/// A random 128-bit identifier in canonical 8-4-4-4-12 form, distinct from
/// the internal storage row id. Minted once at registration and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a canonical textual identifier
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValidationError::InvalidUuid)
    }

    /// The wrapped UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_canonical_form() {
        let id = AccountId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }

    #[test]
    fn test_parse_round_trip() {
        let id = AccountId::generate();
        let parsed = AccountId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_rejects_malformed_identifier() {
        assert_eq!(
            AccountId::parse("not-a-uuid").unwrap_err(),
            ValidationError::InvalidUuid
        );
        assert!(AccountId::parse("550e8400e29b41d4a716").is_err());
    }

    #[test]
    fn test_generated_identifiers_are_unique() {
        assert_ne!(AccountId::generate(), AccountId::generate());
    }
}
