//! Display name value object

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

const MIN_CHARS: usize = 2;
const MAX_CHARS: usize = 50;

/// A validated display name: trimmed, 2-50 characters
///
/// Length is counted in characters, not bytes, so multi-byte names like
/// Japanese are measured correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountName(String);

impl AccountName {
    /// Parse a raw string into a validated display name
    ///
    /// Leading and trailing whitespace is trimmed before validation; the
    /// stored value is the trimmed form.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::RequiredField { field: "name" });
        }
        let length = trimmed.chars().count();
        if !(MIN_CHARS..=MAX_CHARS).contains(&length) {
            return Err(ValidationError::InvalidLength {
                field: "name",
                min: MIN_CHARS,
                max: MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The display name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AccountName> for String {
    fn from(name: AccountName) -> Self {
        name.0
    }
}

impl std::fmt::Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = AccountName::parse("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_rejects_empty_after_trim() {
        assert_eq!(
            AccountName::parse("   ").unwrap_err(),
            ValidationError::RequiredField { field: "name" }
        );
    }

    #[test]
    fn test_length_boundaries() {
        assert!(AccountName::parse("a").is_err());
        assert!(AccountName::parse("ab").is_ok());
        assert!(AccountName::parse("a".repeat(50)).is_ok());
        assert!(AccountName::parse("a".repeat(51)).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two characters, six bytes
        assert!(AccountName::parse("山田").is_ok());
    }
}
