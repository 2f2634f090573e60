//! # Path Help Service
//!
//! Orchestrates the full help flow: resolve the endpoint, fetch the
//! document, navigate to the request schema, expand it into field metadata.
//!
//! Each call is independent and stateless; the only context a call sees is
//! the session its transport was built with. The fetch suspends the calling
//! task while awaiting the response; nothing runs in parallel inside this
//! component and no response is cached.

use crate::client::HelpTransport;
use crate::error::Result;
use crate::paths::{resolve_help_request, CollectionLookup, HelpRequest, StaticCollectionLookup};
use crate::schema::{self, FieldAttr, OpenApiExpander, SchemaExpander};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Resolves and expands backend request schemas for console models
///
/// Built over three collaborators: a [`CollectionLookup`] mapping resource
/// types to collections, a [`HelpTransport`] fetching help documents, and a
/// [`SchemaExpander`] turning OpenAPI properties into field metadata. The
/// lookup and expander default to the built-in implementations.
///
/// # Example
///
/// ```no_run
/// use path_help::client::{HttpHelpTransport, Session};
/// use path_help::PathHelp;
///
/// # async fn run() -> anyhow::Result<()> {
/// let session = Session::new("https://127.0.0.1:8200", "s.token")?;
/// let help = PathHelp::new(HttpHelpTransport::new(session)?);
/// let fields = help.get_props("role-ssh", "ssh").await?;
/// for (name, attr) in &fields {
///     println!("{name}: {}", attr.label);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PathHelp {
    lookup: Arc<dyn CollectionLookup>,
    transport: Arc<dyn HelpTransport>,
    expander: Arc<dyn SchemaExpander>,
}

impl std::fmt::Debug for PathHelp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathHelp").finish_non_exhaustive()
    }
}

impl PathHelp {
    /// Create a service over the given transport with the built-in lookup
    /// and expansion rules
    pub fn new(transport: impl HelpTransport + 'static) -> Self {
        Self {
            lookup: Arc::new(StaticCollectionLookup::new()),
            transport: Arc::new(transport),
            expander: Arc::new(OpenApiExpander),
        }
    }

    /// Replace the collection lookup
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl CollectionLookup + 'static) -> Self {
        self.lookup = Arc::new(lookup);
        self
    }

    /// Replace the schema expander
    #[must_use]
    pub fn with_expander(mut self, expander: impl SchemaExpander + 'static) -> Self {
        self.expander = Arc::new(expander);
        self
    }

    /// Resolve the help URL and schema path key without touching the network
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) for an
    /// unregistered resource type.
    pub fn resolve(&self, resource_type: &str, backend_mount_path: &str) -> Result<HelpRequest> {
        resolve_help_request(self.lookup.as_ref(), resource_type, backend_mount_path)
    }

    /// Fetch the help document for a resolved request and expand its schema
    ///
    /// Either returns the complete expanded mapping or fails; no partial
    /// result is produced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) when the GET
    /// fails and [`Error::SchemaNotFound`](crate::Error::SchemaNotFound)
    /// when the document lacks the expected request schema.
    pub async fn fetch_and_expand_schema(
        &self,
        request: &HelpRequest,
    ) -> Result<BTreeMap<String, FieldAttr>> {
        info!("Fetching help document from '{}'", request.url);
        let document = self.transport.get_help(&request.url).await?;

        let properties = match schema::request_properties(&document, &request.schema_path_key) {
            Ok(props) => props,
            Err(e) => {
                warn!(
                    "Help document from '{}' has no usable request schema: {}",
                    request.url, e
                );
                return Err(e);
            }
        };

        Ok(self.expander.expand(properties))
    }

    /// Resolve, fetch, and expand in one call
    ///
    /// The sole entry point the console uses: given a resource type and the
    /// mount it lives on, returns the field metadata for its request schema.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`resolve`](Self::resolve) and
    /// [`fetch_and_expand_schema`](Self::fetch_and_expand_schema).
    pub async fn get_props(
        &self,
        resource_type: &str,
        backend_mount_path: &str,
    ) -> Result<BTreeMap<String, FieldAttr>> {
        let request = self.resolve(resource_type, backend_mount_path)?;
        self.fetch_and_expand_schema(&request).await
    }
}
