mod dispatch;
mod mutex;
mod registry;
mod store;

pub use dispatch::{
    Command, DispatchError, Dispatcher, Secrets, SlashRequest, SlashResponse, Subcommand,
};
pub use mutex::{LockingError, Mutex};
pub use registry::ResourceRegistry;
pub use store::{ClaimMap, ClaimStore, InMemoryClaimStore, StoreError};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
pub mod http;
