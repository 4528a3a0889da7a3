use std::fmt;

/// Error type for mutex operations.
///
/// There is exactly one way a lock or unlock can fail: the mutex is held by
/// a different claimant. The error carries that claimant so callers can name
/// them in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockingError {
    original_claimant: String,
}

impl LockingError {
    pub(crate) fn new(original_claimant: impl Into<String>) -> Self {
        LockingError {
            original_claimant: original_claimant.into(),
        }
    }

    /// The identity that holds the mutex and blocked the operation.
    pub fn original_claimant(&self) -> &str {
        &self.original_claimant
    }
}

impl fmt::Display for LockingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} claimed the resource", self.original_claimant)
    }
}

impl std::error::Error for LockingError {}
