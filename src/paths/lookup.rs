//! # Collection Lookup
//!
//! Maps console resource types to the backend's REST collection names.

use std::collections::HashMap;

/// Resolves the REST collection name ("base path segment") for a resource type
///
/// The console names its models after what they edit (`role-ssh`,
/// `secret-engine`); the backend groups endpoints by collection (`roles`,
/// `mounts`). Implementations own that mapping. The resolver consults this
/// trait and treats an unregistered type as a configuration error.
pub trait CollectionLookup: Send + Sync {
    /// Return the collection name for `resource_type`, or `None` when the
    /// type is not registered
    fn collection_for(&self, resource_type: &str) -> Option<&str>;
}

/// Registry-backed lookup preloaded with the built-in resource types
///
/// New resource types get new registry entries, never looser matching.
/// Use [`StaticCollectionLookup::with_entry`] to register additional types,
/// or implement [`CollectionLookup`] directly for a dynamic source.
///
/// # Example
///
/// ```
/// use path_help::paths::{CollectionLookup, StaticCollectionLookup};
///
/// let lookup = StaticCollectionLookup::new().with_entry("role-database", "roles");
/// assert_eq!(lookup.collection_for("role-database"), Some("roles"));
/// assert_eq!(lookup.collection_for("unknown-type"), None);
/// ```
#[derive(Debug, Clone)]
pub struct StaticCollectionLookup {
    entries: HashMap<String, String>,
}

/// Built-in resource type to collection mappings shipped with the console
const BUILT_IN_COLLECTIONS: &[(&str, &str)] = &[
    ("role-ssh", "roles"),
    ("role-aws", "roles"),
    ("secret", "mounts"),
    ("secret-engine", "mounts"),
    ("auth-config/ldap", "config"),
    ("ssh-sign", "sign"),
    ("pki-issue", "issue"),
];

impl StaticCollectionLookup {
    /// Create a lookup carrying the built-in registry
    #[must_use]
    pub fn new() -> Self {
        let entries = BUILT_IN_COLLECTIONS
            .iter()
            .map(|(resource_type, collection)| {
                ((*resource_type).to_string(), (*collection).to_string())
            })
            .collect();
        Self { entries }
    }

    /// Register an additional resource type mapping
    #[must_use]
    pub fn with_entry(
        mut self,
        resource_type: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        self.entries.insert(resource_type.into(), collection.into());
        self
    }
}

impl Default for StaticCollectionLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionLookup for StaticCollectionLookup {
    fn collection_for(&self, resource_type: &str) -> Option<&str> {
        self.entries.get(resource_type).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_registry_covers_shipped_models() {
        let lookup = StaticCollectionLookup::new();

        let cases = vec![
            ("role-ssh", "roles"),
            ("role-aws", "roles"),
            ("secret", "mounts"),
            ("secret-engine", "mounts"),
            ("auth-config/ldap", "config"),
            ("ssh-sign", "sign"),
            ("pki-issue", "issue"),
        ];

        for (resource_type, expected) in cases {
            assert_eq!(
                lookup.collection_for(resource_type),
                Some(expected),
                "Resource type '{}' should map to collection '{}'",
                resource_type,
                expected
            );
        }
    }

    #[test]
    fn test_unregistered_type_returns_none() {
        let lookup = StaticCollectionLookup::new();
        assert_eq!(lookup.collection_for("unknown-type"), None);
        assert_eq!(lookup.collection_for(""), None);
    }

    #[test]
    fn test_with_entry_extends_registry() {
        let lookup = StaticCollectionLookup::new().with_entry("role-database", "roles");
        assert_eq!(lookup.collection_for("role-database"), Some("roles"));
        // Built-ins survive extension
        assert_eq!(lookup.collection_for("secret"), Some("mounts"));
    }

    #[test]
    fn test_with_entry_overrides_built_in() {
        let lookup = StaticCollectionLookup::new().with_entry("secret", "kv-mounts");
        assert_eq!(lookup.collection_for("secret"), Some("kv-mounts"));
    }

    #[test]
    fn test_custom_lookup_implementation() {
        struct RolesOnly;

        impl CollectionLookup for RolesOnly {
            fn collection_for(&self, resource_type: &str) -> Option<&str> {
                resource_type.starts_with("role-").then_some("roles")
            }
        }

        let lookup = RolesOnly;
        assert_eq!(lookup.collection_for("role-custom"), Some("roles"));
        assert_eq!(lookup.collection_for("secret"), None);
    }
}
