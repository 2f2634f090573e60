//! # Path Resolution
//!
//! Maps console resource types to the backend's help endpoints.
//!
//! The backend self-describes its API: appending `?help=1` to an endpoint
//! returns an OpenAPI fragment for that path instead of performing the
//! operation. This module owns the finite decision logic that picks, per
//! resource type and mount, the help URL shape (auth method vs. generic
//! engine) and the wildcard path-segment name used to key into the returned
//! document.
//!
//! ## Quick Start
//!
//! ```rust
//! use path_help::paths::{resolve_help_request, StaticCollectionLookup};
//!
//! let lookup = StaticCollectionLookup::new();
//! let request = resolve_help_request(&lookup, "role-ssh", "ssh").unwrap();
//! assert_eq!(request.url, "/v1/ssh/roles/example?help=1");
//! assert_eq!(request.schema_path_key, "/roles/{role}");
//! ```

pub mod lookup;
pub mod resolver;
pub mod sanitize;

pub use lookup::{CollectionLookup, StaticCollectionLookup};
pub use resolver::{is_auth_method_type, resolve_help_request, HelpRequest, AUTH_METHOD_TYPES};
pub use sanitize::sanitize_path;
