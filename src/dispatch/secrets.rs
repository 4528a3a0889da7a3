//! Secrets from the request environment (platform configuration variables).

use std::collections::HashMap;

/// Configuration variables provided by the hosting platform.
///
/// The dispatcher only interprets one key — `resources`, the comma-joined
/// allow-list of lockable resource names:
///
/// ```json
/// {
///   "resources": "kings-landing,winterfell"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    variables: HashMap<String, String>,
}

impl Secrets {
    /// Create an empty secrets map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create secrets from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// The raw comma-joined resource allow-list (`resources`).
    pub fn resources(&self) -> Option<&str> {
        self.get("resources")
    }

    /// Get a secret by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set a secret.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Check if a secret exists.
    pub fn has(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}
