//! Domain services
//!
//! - `clock` - injectable time source
//! - `password` - credential hashing and verification
//! - `token` - bearer token issuance and verification
//! - `auth` - registration and sign-in orchestration

pub mod auth;
pub mod clock;
pub mod password;
pub mod token;

pub use clock::{Clock, SystemClock};
pub use token::{TokenConfig, TokenService};
