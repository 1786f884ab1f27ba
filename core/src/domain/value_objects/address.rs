//! Free-text address components

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A non-empty city name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct City(String);

impl City {
    /// Parse a raw string; the only rule is non-emptiness, no trimming
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::RequiredField { field: "city" });
        }
        Ok(Self(value))
    }

    /// The city as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for City {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.0
    }
}

/// A non-empty street line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Street(String);

impl Street {
    /// Parse a raw string; the only rule is non-emptiness, no trimming
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::RequiredField { field: "street" });
        }
        Ok(Self(value))
    }

    /// The street as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Street {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Street> for String {
    fn from(street: Street) -> Self {
        street.0
    }
}
