//! Property-based tests for configuration loading and serialization.
//!
//! Test coverage:
//! - ConnectionConfig: roundtrip serialization with all fields
//! - AuthConfig with ApiToken: strategy type and secret are preserved
//! - ConfigLoader: timeout bounds and base URL normalization

use proptest::prelude::*;
use secrecy::{ExposeSecret, SecretString};

use grafana_config::constants::MAX_TIMEOUT_SECS;
use grafana_config::{AuthConfig, AuthStrategy, ConfigLoader, ConnectionConfig};
use std::time::Duration;

/// Strategy for generating valid base URLs.
fn base_url_strategy() -> impl Strategy<Value = String> {
    let localhost_strategy =
        (3000u16..=3010u16).prop_map(|port| format!("http://localhost:{}", port));

    let host_strategy = prop_oneof![
        Just("grafana"),
        Just("grafana-dev"),
        Just("grafana-prod"),
        Just("monitoring"),
    ];
    let domain_strategy = prop_oneof![
        Just("example.com"),
        Just("internal.local"),
        Just("company.net"),
    ];

    let production_strategy = (host_strategy, domain_strategy)
        .prop_map(|(host, domain)| format!("https://{}.{}", host, domain));

    prop_oneof![localhost_strategy, production_strategy]
}

/// Strategy for generating API token strings.
fn api_token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{16,64}".prop_map(|s| format!("glsa_{}", s))
}

proptest! {
    #[test]
    fn connection_config_roundtrip(
        base_url in base_url_strategy(),
        skip_verify in any::<bool>(),
        timeout_secs in 1u64..=MAX_TIMEOUT_SECS,
    ) {
        let config = ConnectionConfig {
            base_url: base_url.clone(),
            skip_verify,
            timeout: Duration::from_secs(timeout_secs),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: ConnectionConfig = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back.base_url, base_url);
        prop_assert_eq!(back.skip_verify, skip_verify);
        prop_assert_eq!(back.timeout, Duration::from_secs(timeout_secs));
    }

    #[test]
    fn api_token_auth_roundtrip(token in api_token_strategy()) {
        let auth = AuthConfig {
            strategy: AuthStrategy::ApiToken {
                token: SecretString::new(token.clone().into()),
            },
        };

        let json = serde_json::to_string(&auth).unwrap();
        let back: AuthConfig = serde_json::from_str(&json).unwrap();

        match back.strategy {
            AuthStrategy::ApiToken { token: back_token } => {
                prop_assert_eq!(back_token.expose_secret(), token.as_str());
            }
            other => prop_assert!(false, "unexpected strategy: {:?}", other),
        }
    }

    #[test]
    fn loader_accepts_timeouts_in_range(timeout_secs in 1u64..=MAX_TIMEOUT_SECS) {
        let result = ConfigLoader::new()
            .with_base_url("http://localhost:3000".to_string())
            .with_timeout(Duration::from_secs(timeout_secs))
            .build();
        prop_assert!(result.is_ok());
    }

    #[test]
    fn loader_rejects_timeouts_above_max(extra in 1u64..10_000) {
        let result = ConfigLoader::new()
            .with_base_url("http://localhost:3000".to_string())
            .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + extra))
            .build();
        prop_assert!(result.is_err());
    }

    #[test]
    fn loader_strips_trailing_slashes(base_url in base_url_strategy(), slashes in 1usize..4) {
        let raw = format!("{}{}", base_url, "/".repeat(slashes));
        let config = ConfigLoader::new().with_base_url(raw).build().unwrap();
        prop_assert_eq!(config.connection.base_url, base_url);
    }
}
