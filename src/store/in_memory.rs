//! InMemoryClaimStore - blob-backed claim store for testing and development.

use std::sync::{Arc, RwLock};

use super::{ClaimMap, ClaimStore, StoreError};

/// In-memory claim store holding one serialized JSON blob.
///
/// Storing bytes rather than the live map keeps the impl honest about the
/// whole-blob contract: `load` decodes everything, `save` replaces
/// everything. Clone-friendly via Arc — clones share the blob.
#[derive(Clone)]
pub struct InMemoryClaimStore {
    blob: Arc<RwLock<Option<Vec<u8>>>>,
}

impl Default for InMemoryClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryClaimStore {
    /// Create a new store with no saved blob.
    pub fn new() -> Self {
        Self {
            blob: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a store pre-seeded with the given claims.
    pub fn with_claims(claims: ClaimMap) -> Result<Self, StoreError> {
        let store = Self::new();
        store.save(&claims)?;
        Ok(store)
    }
}

impl ClaimStore for InMemoryClaimStore {
    fn load(&self) -> Result<Option<ClaimMap>, StoreError> {
        let blob = self
            .blob
            .read()
            .map_err(|_| StoreError::Backend("blob lock poisoned".into()))?;

        match blob.as_deref() {
            Some(bytes) => {
                let claims: ClaimMap = serde_json::from_slice(bytes)
                    .map_err(|e| StoreError::Serde(e.to_string()))?;
                Ok(Some(claims))
            }
            None => Ok(None),
        }
    }

    fn save(&self, claims: &ClaimMap) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(claims).map_err(|e| StoreError::Serde(e.to_string()))?;

        let mut blob = self
            .blob
            .write()
            .map_err(|_| StoreError::Backend("blob lock poisoned".into()))?;
        *blob = Some(bytes);
        Ok(())
    }
}
