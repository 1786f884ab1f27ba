//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the standard envelope
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Standard API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_serializes_under_data_key() {
        let response = ApiResponse::new(serde_json::json!({"id": 1}));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn test_error_response_fields() {
        let response = ErrorResponse::new("not_found", "store not found");
        assert_eq!(response.error, "not_found");
        assert_eq!(response.message, "store not found");
    }
}
