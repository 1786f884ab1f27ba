//! Store repository abstraction

mod mock;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockStoreRepository;
pub use trait_::StoreRepository;
