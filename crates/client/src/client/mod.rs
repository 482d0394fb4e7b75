//! Main Grafana HTTP API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for administering
//! folders, dashboards and alert notification channels.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `folders`: Folder creation and lookup
//! - `alert_channels`: Alert notification channel lookup
//! - `dashboards`: Dashboard upsert and deletion
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Name matching (delegated to [`crate::lookup`])
//!
//! # Invariants
//! - The client holds immutable configuration only and is cheap to clone
//! - Every call performs fresh requests; nothing is cached between calls
//! - Requests are never retried

pub mod builder;

mod alert_channels;
mod dashboards;
mod folders;

use crate::auth::AuthStrategy;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// Use [`GrafanaClient::builder()`] for full control, or [`GrafanaClient::new`]
/// to wrap an existing transport:
///
/// ```rust,no_run
/// use grafana_client::GrafanaClient;
///
/// # fn main() -> grafana_client::Result<()> {
/// let client = GrafanaClient::new(reqwest::Client::new(), "http://localhost:3000", "glsa_token")?;
/// # Ok(())
/// # }
/// ```
///
/// # Authentication
///
/// - `AuthStrategy::Anonymous`: no `Authorization` header
/// - `AuthStrategy::ApiToken`: `Authorization: Bearer <token>`
/// - `AuthStrategy::BasicAuth`: HTTP basic credentials
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Create a client from a transport, a base URL and a token.
    ///
    /// An empty `token` means requests are sent without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(http: reqwest::Client, base_url: &str, token: &str) -> Result<Self> {
        Self::builder()
            .http_client(http)
            .base_url(base_url.to_string())
            .api_token(token)
            .build()
    }

    /// Get the base URL, without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if requests carry credentials.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }
}

/// Fail early on base URLs that would only error at request time.
pub(crate) fn validate_base_url(base_url: &str) -> Result<()> {
    let url = reqwest::Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ClientError::InvalidUrl(format!(
            "Unsupported scheme '{}' in base URL '{}'",
            other, base_url
        ))),
    }
}
