//! Path Help Library
//!
//! Resolves, for a console resource type and backend mount, the help
//! endpoint and request schema that a secrets backend's self-describing API
//! exposes, then expands that schema into field metadata for rendering
//! input forms.
//!
//! ## Quick Start
//!
//! ```no_run
//! use path_help::client::{HttpHelpTransport, Session};
//! use path_help::PathHelp;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let session = Session::new("https://127.0.0.1:8200", "s.token")?;
//! let help = PathHelp::new(HttpHelpTransport::new(session)?);
//! let fields = help.get_props("secret", "kv").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout
//!
//! - [`paths`]: the decision logic (collection lookup, wildcard table,
//!   help-URL shapes, and mount path sanitization)
//! - [`client`]: explicit session context and the reqwest transport
//! - [`schema`]: help-document navigation and field-attribute expansion
//! - [`help`]: the [`PathHelp`] service tying the collaborators together

pub mod client;
pub mod error;
pub mod help;
pub mod paths;
pub mod schema;

pub use error::{Error, Result};
pub use help::PathHelp;
