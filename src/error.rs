//! # Error Types
//!
//! Error taxonomy for help-request resolution and schema expansion.
//!
//! The component performs no local recovery: the correct remediation
//! (re-auth, retry, alternate mount) depends on caller context it does not
//! own, so every failure is classified and propagated.

use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes surfaced by help resolution and fetching
///
/// - `Configuration` is a caller bug and should not be retried.
/// - `Transport` is a network/HTTP failure; retry policy belongs to the caller.
/// - `SchemaNotFound` means the backend answered but the document lacks the
///   expected request schema; callers should surface this as "no editable
///   fields available" rather than crashing.
#[derive(Debug, Error)]
pub enum Error {
    /// The resource type has no entry in the collection registry
    #[error("unknown resource type '{resource_type}': no collection mapping registered")]
    Configuration { resource_type: String },

    /// The help request failed in transit or the backend refused it
    #[error("help request to '{url}' failed: {reason}")]
    Transport {
        url: String,
        /// HTTP status when the backend responded, `None` for connection-level failures
        status: Option<u16>,
        reason: String,
    },

    /// The help document came back without the expected request schema
    #[error("no request schema under '{path_key}': help document is missing '{missing}'")]
    SchemaNotFound { path_key: String, missing: String },
}

impl Error {
    /// Build a configuration error for an unregistered resource type
    pub(crate) fn unknown_resource_type(resource_type: impl Into<String>) -> Self {
        Error::Configuration {
            resource_type: resource_type.into(),
        }
    }

    /// Build a transport error for a failed help request
    #[must_use]
    pub fn transport(
        url: impl Into<String>,
        status: Option<u16>,
        reason: impl Into<String>,
    ) -> Self {
        Error::Transport {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Build a schema-not-found error naming the first missing segment
    pub(crate) fn schema_not_found(
        path_key: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        Error::SchemaNotFound {
            path_key: path_key.into(),
            missing: missing.into(),
        }
    }

    /// HTTP status attached to a transport error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this error is transient (a retry elsewhere might succeed)
    ///
    /// Connection-level failures and 5xx responses are transient; everything
    /// else (bad configuration, 4xx, missing schema) is permanent.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transport { status, .. } => match status {
                Some(code) => *code >= 500,
                None => true,
            },
            Error::Configuration { .. } | Error::SchemaNotFound { .. } => false,
        }
    }
}
