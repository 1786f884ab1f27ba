//! HTTP error handling

pub mod error;

pub use error::{domain_error_response, not_found_response, validation_error_response};
