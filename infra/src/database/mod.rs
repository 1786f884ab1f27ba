//! Database connection management and PostgreSQL repositories

pub mod connection;
pub mod postgres;
