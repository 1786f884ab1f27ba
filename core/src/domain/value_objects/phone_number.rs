//! Phone number value object

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Optional leading `+`, then 7-15 digits or hyphens
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\-]{7,15}$").expect("valid phone regex"));

/// A validated phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a raw string into a validated phone number
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !PHONE_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidFormat {
                field: "phone_number",
            });
        }
        Ok(Self(value))
    }

    /// The phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits_hyphens_and_plus() {
        for value in ["0312345678", "+81312345678", "03-1234-5678"] {
            assert!(PhoneNumber::parse(value).is_ok(), "should accept {value}");
        }
    }

    #[test]
    fn test_rejects_out_of_range_lengths() {
        assert!(PhoneNumber::parse("123456").is_err());
        assert!(PhoneNumber::parse("1234567890123456").is_err());
    }

    #[test]
    fn test_rejects_letters_and_spaces() {
        assert!(PhoneNumber::parse("03-1234-ABCD").is_err());
        assert!(PhoneNumber::parse("03 1234 5678").is_err());
    }
}
