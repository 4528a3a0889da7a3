//! Error types for command dispatch.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for a failed dispatch.
///
/// Only environmental failures live here. Business-level outcomes (help,
/// unknown resource, contention) render as response text and never become a
/// `DispatchError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The deployment is misconfigured (e.g. the resource allow-list is
    /// unset). Raised before any store access.
    Config(String),
    /// The claim store failed to load or save.
    Store(StoreError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Both propagate as-is: config errors are plain strings, store
            // errors pass through unchanged.
            DispatchError::Config(msg) => write!(f, "{}", msg),
            DispatchError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DispatchError::Store(e) => Some(e),
            DispatchError::Config(_) => None,
        }
    }
}

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        DispatchError::Store(err)
    }
}
