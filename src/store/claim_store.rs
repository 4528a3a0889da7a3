//! ClaimStore - Abstract whole-blob storage for resource claims.

use std::collections::HashMap;

use super::StoreError;

/// The full claim mapping: resource name → claimant, or an explicit `None`
/// for a resource that was claimed and later released. Releasing keeps the
/// key with a null value rather than removing it, so a saved blob
/// distinguishes "released" from "never claimed".
pub type ClaimMap = HashMap<String, Option<String>>;

/// Abstract whole-blob storage for the claim mapping.
///
/// The mapping is loaded in full, mutated for one key, and saved in full —
/// there is no per-key update, so implementations may store a single opaque
/// blob. In-memory storage is the default; backends might be Redis, S3, a
/// row in Postgres, etc.
///
/// Two concurrent dispatches against the same store can race between `load`
/// and `save`, with a last-writer-wins outcome. Callers needing mutual
/// exclusion under concurrent requests must serialize at the storage layer.
pub trait ClaimStore: Send + Sync {
    /// Load the full claim mapping. Returns `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<ClaimMap>, StoreError>;

    /// Overwrite the full claim mapping.
    fn save(&self, claims: &ClaimMap) -> Result<(), StoreError>;
}
