//! Centralized constants for the Grafana client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Grafana HTTP port.
pub const DEFAULT_GRAFANA_PORT: u16 = 3000;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Listing Defaults
// =============================================================================

/// Page size requested from the folder listing endpoint.
///
/// Lookups scan a single page, so this bounds how many folders a
/// title lookup can see.
pub const DEFAULT_FOLDER_LIST_LIMIT: u64 = 1000;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the Grafana server.
pub const ENV_BASE_URL: &str = "GRAFANA_URL";

/// API token (service account token or legacy API key).
pub const ENV_API_TOKEN: &str = "GRAFANA_API_TOKEN";

/// Username for HTTP basic authentication.
pub const ENV_USERNAME: &str = "GRAFANA_USERNAME";

/// Password for HTTP basic authentication.
pub const ENV_PASSWORD: &str = "GRAFANA_PASSWORD";

/// Whether to skip TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";
