//! Connection configuration types for the Grafana client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from env or `.env` files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - `Config::default()` targets a local development server (localhost:3000).

use crate::constants::{DEFAULT_GRAFANA_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Grafana server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl ConnectionConfig {
    fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: default_timeout(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for Config {
    /// Anonymous access to `http://localhost:3000`.
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(format!(
                "http://localhost:{}",
                DEFAULT_GRAFANA_PORT
            )),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
        }
    }

    /// Create a new config with the specified base URL and basic auth credentials.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::BasicAuth { username, password },
            },
        }
    }

    /// Whether requests built from this config carry credentials.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self.auth.strategy, AuthStrategy::Anonymous)
    }
}
