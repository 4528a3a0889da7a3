//! The allow-list of lockable resource names.

/// The ordered set of resource names users may lock, parsed from the
/// comma-joined `resources` secret. Immutable within a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRegistry {
    names: Vec<String>,
}

impl ResourceRegistry {
    /// Parse a registry from the raw secret value.
    ///
    /// An unset, empty, or all-whitespace value yields an empty registry.
    /// Empty segments (`"a,,b"`) are dropped; order is preserved.
    pub fn from_secret(value: Option<&str>) -> Self {
        let names = match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        ResourceRegistry { names }
    }

    /// True when no resources are configured.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Membership test for one resource name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// All configured names, in configuration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
