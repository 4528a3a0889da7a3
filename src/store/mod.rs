mod claim_store;
mod error;
mod in_memory;

pub use claim_store::{ClaimMap, ClaimStore};
pub use error::StoreError;
pub use in_memory::InMemoryClaimStore;
