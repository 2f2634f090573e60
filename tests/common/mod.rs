//! Common test utilities for integration tests
//!
//! Shared initialization for tests that exercise the reqwest transport.

use std::sync::Once;

static RUSTLS_INIT: Once = Once::new();

/// Install the rustls crypto provider for tests
///
/// Required for rustls 0.23+ when no default provider is set via features.
/// Guarded by a `Once` so every test can call it unconditionally.
pub fn init_rustls() {
    RUSTLS_INIT.call_once(|| {
        // Same ring provider the pathctl binary installs at startup
        rustls::crypto::ring::default_provider()
            .install_default()
            .expect("Failed to install rustls crypto provider");
    });
}
