//! # Help Request Resolver
//!
//! Picks the help-endpoint URL and the OpenAPI path key for a resource type
//! and mount. The mapping is a finite, closed decision table; an
//! unrecognized resource type is a configuration error, and an unmapped
//! collection simply gets no wildcard segment.

use crate::error::{Error, Result};
use crate::paths::lookup::CollectionLookup;
use tracing::debug;

/// Resource types whose help endpoints live under the auth tree
///
/// Closed set. Auth method configuration is described at
/// `/v1/auth/{mount}/{collection}` rather than the generic
/// `/v1/{mount}/{collection}/example` shape.
pub const AUTH_METHOD_TYPES: &[&str] = &["auth-config/ldap"];

/// A resolved help request: where to GET and where to look in the response
///
/// Produced by [`resolve_help_request`]; consumed by the transport and the
/// schema navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    /// Help endpoint URL, relative to the backend address (`/v1/...?help=1`)
    pub url: String,
    /// Collection name the lookup returned for the resource type
    pub collection: String,
    /// Wildcard path-segment name, when the collection's paths carry one
    pub wildcard: Option<&'static str>,
    /// Key into `openapi.paths` of the returned help document
    pub schema_path_key: String,
}

/// Check whether a resource type configures an authentication method
#[must_use]
pub fn is_auth_method_type(resource_type: &str) -> bool {
    AUTH_METHOD_TYPES.contains(&resource_type)
}

/// Wildcard segment name per collection, with a tie-break on resource type
/// where one collection serves several models
fn wildcard_for(collection: &str, resource_type: &str) -> Option<&'static str> {
    match collection {
        "roles" => {
            if resource_type == "role-ssh" {
                Some("role")
            } else {
                Some("name")
            }
        }
        "mounts" => {
            if resource_type == "secret" {
                Some("path")
            } else {
                Some("config")
            }
        }
        "sign" | "issue" => Some("role"),
        _ => None,
    }
}

/// Resolve the help URL and OpenAPI path key for a resource type and mount
///
/// Pure function of its inputs and the fixed tables; performs no network
/// access. The mount is embedded as given; callers normalize user input
/// with [`sanitize_path`](crate::paths::sanitize_path) first.
///
/// # Arguments
///
/// * `lookup` - Maps the resource type to its REST collection name
/// * `resource_type` - Console model identifier, e.g. `role-ssh`
/// * `backend_mount_path` - Mount point of the engine/method, e.g. `ssh`
///
/// # Errors
///
/// Returns [`Error::Configuration`] when the lookup has no entry for
/// `resource_type`.
///
/// # Example
///
/// ```
/// use path_help::paths::{resolve_help_request, StaticCollectionLookup};
///
/// let lookup = StaticCollectionLookup::new();
/// let request = resolve_help_request(&lookup, "secret", "kv").unwrap();
/// assert_eq!(request.url, "/v1/kv/mounts/example?help=1");
/// assert_eq!(request.schema_path_key, "/mounts/{path}");
/// ```
pub fn resolve_help_request(
    lookup: &dyn CollectionLookup,
    resource_type: &str,
    backend_mount_path: &str,
) -> Result<HelpRequest> {
    let collection = lookup
        .collection_for(resource_type)
        .ok_or_else(|| Error::unknown_resource_type(resource_type))?;

    let url = if is_auth_method_type(resource_type) {
        format!("/v1/auth/{backend_mount_path}/{collection}?help=1")
    } else {
        format!("/v1/{backend_mount_path}/{collection}/example?help=1")
    };

    let wildcard = wildcard_for(collection, resource_type);
    let schema_path_key = match wildcard {
        Some(name) => format!("/{collection}/{{{name}}}"),
        None => format!("/{collection}"),
    };

    debug!(
        "Resolved help request for '{}' on mount '{}': url={}, key={}",
        resource_type, backend_mount_path, url, schema_path_key
    );

    Ok(HelpRequest {
        url,
        collection: collection.to_string(),
        wildcard,
        schema_path_key,
    })
}
