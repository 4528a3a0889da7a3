use std::fmt;

/// Error type for claim store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed to read or write the blob (I/O, poisoned interior
    /// lock, remote failure).
    Backend(String),
    /// The blob could not be encoded or decoded.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "store backend error: {}", msg),
            StoreError::Serde(msg) => write!(f, "store serde error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
