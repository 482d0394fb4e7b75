//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Grafana client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from grafana-client
#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use grafana_client::{ClientError, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token used by tests that exercise authenticated requests.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "glsa_test_token";

/// Build a client pointed at the mock server, authenticated with `token`.
#[allow(dead_code)]
pub fn client_for(mock_server: &MockServer, token: &str) -> GrafanaClient {
    GrafanaClient::new(Client::new(), &mock_server.uri(), token)
        .expect("mock server URI should be a valid base URL")
}

/// The `{message, status}` body Grafana sends on a version conflict.
#[allow(dead_code)]
pub fn version_mismatch_body() -> serde_json::Value {
    serde_json::json!({
        "message": "The dashboard has been changed by someone else",
        "status": "version-mismatch"
    })
}
