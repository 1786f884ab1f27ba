//! Account entities for the two tenant kinds

pub mod store;
pub mod user;

pub use store::Store;
pub use user::User;

use crate::domain::value_objects::{AccountId, Email};

/// The surface shared by both account kinds
///
/// Sign-in verification and token issuance only need these three
/// accessors, so they are written once against this trait instead of per
/// kind.
pub trait Account {
    /// The immutable external identifier
    fn account_id(&self) -> AccountId;

    /// The validated email address
    fn email(&self) -> &Email;

    /// The stored password digest (never the raw password)
    fn password_hash(&self) -> &str;
}
