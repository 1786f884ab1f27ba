//! Domain-specific error types for registration, authentication and
//! token operations
//!
//! Error messages here are what the presentation layer surfaces to
//! clients, so authentication failures deliberately share one message:
//! whether an email is unknown or a password is wrong must not be
//! distinguishable from the outside.

use thiserror::Error;

/// Result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, DomainError>;

/// Field-level validation errors from value object constructors
///
/// Each variant names the offending field so the client can surface a
/// precise message. These are recoverable client errors and are never
/// retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email format")]
    InvalidEmail,

    #[error("{field} cannot be empty")]
    RequiredField { field: &'static str },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("invalid {field} format")]
    InvalidFormat { field: &'static str },

    #[error("invalid uuid format")]
    InvalidUuid,

    #[error("invalid prefecture")]
    InvalidPrefecture,
}

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Duplicate registration; surfaced with a generic message
    #[error("an account with this email already exists")]
    EmailAlreadyRegistered,

    /// Single message for both unknown email and wrong password so
    /// account existence cannot be enumerated
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Token-related errors
///
/// The API layer collapses every variant into one 401 response; the
/// variants exist so internal logs can tell the causes apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("token signature verification failed")]
    InvalidSignature,

    #[error("unexpected signing algorithm")]
    InvalidAlgorithm,

    #[error("token generation failed")]
    GenerationFailed,
}

/// Umbrella error for the domain layer
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Storage failure; propagated to the caller, never retried here
    #[error("database error: {message}")]
    Database { message: String },

    /// Catastrophic failure inside a request (hashing entropy, key setup)
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for storage failures
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Shorthand for internal failures
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The sign-in flow relies on this exact message for both the
        // unknown-email and wrong-password cases.
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::InvalidLength {
            field: "name",
            min: 2,
            max: 50,
        };
        assert_eq!(err.to_string(), "name must be between 2 and 50 characters");
    }

    #[test]
    fn test_domain_error_wraps_validation() {
        let err: DomainError = ValidationError::InvalidEmail.into();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
