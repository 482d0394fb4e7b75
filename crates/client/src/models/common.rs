//! Common types shared across Grafana API models.
//!
//! This module contains the error envelope returned by every endpoint on
//! failure. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// Error body Grafana sends with non-2xx responses.
///
/// Both fields are optional on the wire; some endpoints only send `message`,
/// and proxies in front of Grafana may send neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_status() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"message": "The folder has been changed by someone else", "status": "version-mismatch"}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.message,
            "The folder has been changed by someone else"
        );
        assert_eq!(envelope.status.as_deref(), Some("version-mismatch"));
    }

    #[test]
    fn test_envelope_message_only() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"message": "Permission denied"}"#).unwrap();
        assert_eq!(envelope.message, "Permission denied");
        assert!(envelope.status.is_none());
    }
}
