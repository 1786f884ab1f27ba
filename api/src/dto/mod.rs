//! Request and response shapes for the HTTP API
//!
//! Responses are views over the domain entities; the password digest is
//! never serialized.

pub mod store_dto;
pub mod user_dto;

pub use store_dto::{SigninStoreRequest, SignupStoreRequest, StoreSessionResponse, StoreView};
pub use user_dto::{SigninUserRequest, SignupUserRequest, UserSessionResponse, UserView};
