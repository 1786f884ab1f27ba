//! Postal code value object

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Japanese postal code: 3 digits, optional hyphen, 4 digits
static ZIPCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-?\d{4}$").expect("valid zipcode regex"));

/// A validated postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Zipcode(String);

impl Zipcode {
    /// Parse a raw string into a validated postal code
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !ZIPCODE_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidFormat { field: "zipcode" });
        }
        Ok(Self(value))
    }

    /// The postal code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Zipcode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Zipcode> for String {
    fn from(zipcode: Zipcode) -> Self {
        zipcode.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_with_and_without_hyphen() {
        assert!(Zipcode::parse("123-4567").is_ok());
        assert!(Zipcode::parse("1234567").is_ok());
    }

    #[test]
    fn test_rejects_wrong_digit_grouping() {
        assert!(Zipcode::parse("12-34567").is_err());
        assert!(Zipcode::parse("1234-567").is_err());
        assert!(Zipcode::parse("123-456").is_err());
        assert!(Zipcode::parse("123-45678").is_err());
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(Zipcode::parse("abc-defg").is_err());
    }
}
