//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GrafanaClient`] methods)
//! - Loading settings from the environment (handled by `grafana_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - A caller-supplied transport is used as is; `timeout` and `skip_verify` do not apply to it

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::{GrafanaClient, validate_base_url};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use grafana_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`GrafanaClient`].
///
/// All options have defaults except `base_url`.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use grafana_client::GrafanaClient;
///
/// # fn main() -> grafana_client::Result<()> {
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .api_token("glsa_token")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    auth_strategy: AuthStrategy,
    http: Option<reqwest::Client>,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: AuthStrategy::Anonymous,
            http: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana server.
    ///
    /// This should include the protocol, and the sub-path when Grafana is
    /// served behind a reverse proxy, e.g. `https://example.com/grafana`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    ///
    /// Defaults to [`AuthStrategy::Anonymous`].
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Authenticate with a service account token or API key.
    ///
    /// An empty token leaves the client unauthenticated.
    pub fn api_token(mut self, token: &str) -> Self {
        self.auth_strategy = AuthStrategy::from_token(token);
        self
    }

    /// Use an existing HTTP client instead of building one.
    ///
    /// Its own timeout and TLS settings apply; [`timeout`](Self::timeout) and
    /// [`skip_verify`](Self::skip_verify) are ignored.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds. Requests exceeding it fail with
    /// [`ClientError::Timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for API call tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,no_run
    /// use grafana_client::GrafanaClient;
    /// use grafana_config::ConfigLoader;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = GrafanaClient::builder().from_config(&config).build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = AuthStrategy::from(&config.auth.strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://grafana.example.com/"` -> `"https://grafana.example.com"`
    /// - `"https://example.com/grafana//"` -> `"https://example.com/grafana"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or
    /// does not parse as an HTTP(S) URL.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        validate_base_url(&base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut http_builder = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

                if self.skip_verify {
                    if base_url.starts_with("https://") {
                        http_builder = http_builder.danger_accept_invalid_certs(true);
                    } else {
                        tracing::warn!(
                            "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                        );
                    }
                }

                http_builder.build()?
            }
        };

        Ok(GrafanaClient {
            http,
            base_url,
            auth: self.auth_strategy,
            metrics: self.metrics,
        })
    }
}
