//! Endpoint handlers

pub mod health;
pub mod stores;
pub mod users;
