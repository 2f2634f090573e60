//! # Help Transport
//!
//! HTTP session and transport for fetching help documents.
//!
//! The session is an explicit capability object: address and client token
//! are passed in, never read from process-wide state, so resolution and
//! fetching stay unit-testable without a runtime container. The transport
//! issues exactly one GET per call; retry, timeout, and caching policy all
//! belong to callers.

use crate::error::{Error, Result};
use anyhow::Context;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Header carrying the client token on every help request
const CLIENT_TOKEN_HEADER: &str = "X-Vault-Token";

/// Backend address and client token for one console session
///
/// The address is validated and normalized on construction (no trailing
/// slash); the token is sent as the `X-Vault-Token` header and never
/// appears in `Debug` output.
pub struct Session {
    address: String,
    token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session for the given backend address and client token
    ///
    /// # Arguments
    ///
    /// * `address` - Backend base URL, e.g. `https://127.0.0.1:8200`
    /// * `token` - Client token for the session
    ///
    /// # Errors
    ///
    /// Returns an error when the address is not an `http(s)://` URL or the
    /// token is empty.
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> anyhow::Result<Self> {
        let address = address.into();
        let address_trimmed = address.trim();

        if address_trimmed.is_empty() {
            return Err(anyhow::anyhow!("backend address cannot be empty"));
        }

        let url_regex = Regex::new(r"^https?://[^\s/$.?#].[^\s]*$")
            .map_err(|e| anyhow::anyhow!("Failed to compile regex: {e}"))?;

        if !url_regex.is_match(address_trimmed) {
            return Err(anyhow::anyhow!(
                "backend address '{address_trimmed}' must be a valid URL starting with http:// or https://"
            ));
        }

        let token = token.into();
        if token.trim().is_empty() {
            return Err(anyhow::anyhow!("client token cannot be empty"));
        }

        Ok(Self {
            address: address_trimmed.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
        })
    }

    /// Backend base URL without a trailing slash
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Fetches help documents from the backend
///
/// One GET per call. Implementations decide how requests are authenticated
/// and transported; the resolver and orchestration layers only see the
/// returned document.
#[async_trait]
pub trait HelpTransport: Send + Sync {
    /// GET the help document at `url` (relative to the backend address)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on connection failure, a non-2xx
    /// response, or an unparseable body; the HTTP status is attached
    /// whenever the backend responded.
    async fn get_help(&self, url: &str) -> Result<Value>;
}

/// reqwest-based transport carrying a [`Session`]
#[derive(Debug)]
pub struct HttpHelpTransport {
    http_client: Client,
    session: Session,
}

impl HttpHelpTransport {
    /// Create a transport for the given session
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(session: Session) -> anyhow::Result<Self> {
        // rustls TLS is selected through Cargo features; the crypto provider
        // must be installed by the binary before first use
        let http_client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            session,
        })
    }
}

#[async_trait]
impl HelpTransport for HttpHelpTransport {
    async fn get_help(&self, url: &str) -> Result<Value> {
        let full_url = format!("{}{}", self.session.address, url);
        debug!("Fetching help document from {}", full_url);

        let response = self
            .http_client
            .get(&full_url)
            .header(CLIENT_TOKEN_HEADER, &self.session.token)
            .send()
            .await
            .map_err(|e| Error::transport(url, None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let reason = if error_text.is_empty() {
                format!("backend returned {status}")
            } else {
                format!("backend returned {status}: {error_text}")
            };
            return Err(Error::transport(url, Some(status.as_u16()), reason));
        }

        response.json::<Value>().await.map_err(|e| {
            Error::transport(
                url,
                Some(status.as_u16()),
                format!("invalid JSON body: {e}"),
            )
        })
    }
}
