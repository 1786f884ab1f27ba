//! Prefecture value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// The closed set of prefectures the service operates in
///
/// Extending coverage means adding a variant here; arbitrary strings are
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prefecture {
    Tokyo,
    Osaka,
    Kyoto,
}

impl Prefecture {
    /// All supported prefectures
    pub const ALL: [Prefecture; 3] = [Prefecture::Tokyo, Prefecture::Osaka, Prefecture::Kyoto];

    /// Parse a raw string against the allow-list
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::from_str(value)
    }

    /// Canonical textual form
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefecture::Tokyo => "Tokyo",
            Prefecture::Osaka => "Osaka",
            Prefecture::Kyoto => "Kyoto",
        }
    }
}

impl FromStr for Prefecture {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Tokyo" => Ok(Prefecture::Tokyo),
            "Osaka" => Ok(Prefecture::Osaka),
            "Kyoto" => Ok(Prefecture::Kyoto),
            _ => Err(ValidationError::InvalidPrefecture),
        }
    }
}

impl std::fmt::Display for Prefecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_listed_prefecture() {
        for prefecture in Prefecture::ALL {
            assert_eq!(Prefecture::parse(prefecture.as_str()).unwrap(), prefecture);
        }
    }

    #[test]
    fn test_rejects_values_outside_allow_list() {
        for value in ["Hokkaido", "tokyo", "TOKYO", ""] {
            assert_eq!(
                Prefecture::parse(value).unwrap_err(),
                ValidationError::InvalidPrefecture,
                "should reject {value:?}"
            );
        }
    }
}
