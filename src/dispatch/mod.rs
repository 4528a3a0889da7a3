//! dispatch — slash-command parsing and lock orchestration.
//!
//! The `Dispatcher` owns a `ClaimStore` and handles one command end to end:
//! parse → validate → load → decide (via `Mutex`) → persist → respond.
//!
//! ## Example
//!
//! ```ignore
//! use mutexbot::{Dispatcher, InMemoryClaimStore, Secrets, SlashRequest};
//!
//! let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
//!
//! let mut secrets = Secrets::new();
//! secrets.set("resources", "staging,ci-pool");
//!
//! let request = SlashRequest {
//!     command: "/lock".to_string(),
//!     text: "lock staging".to_string(),
//!     user_name: "pat".to_string(),
//! };
//!
//! let response = dispatcher.dispatch(&request, &secrets)?;
//! assert_eq!(response.text, "You've successfully claimed staging");
//! ```

mod command;
mod dispatcher;
mod error;
mod request;
mod secrets;

pub use command::{Command, Subcommand};
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use request::{SlashRequest, SlashResponse};
pub use secrets::Secrets;
