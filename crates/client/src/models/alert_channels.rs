//! Alert notification channel models.
//!
//! Channels are read-only from this client's point of view: they are listed
//! and searched, never created or modified.
//!
//! Grafana endpoint:
//! - GET /api/alert-notifications

use serde::{Deserialize, Serialize};

/// A configured destination (email, Slack, ...) for legacy alerting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertChannel {
    pub id: u64,
    #[serde(default)]
    pub uid: String,
    pub name: String,
    /// Notifier type, e.g. `email` or `slack`.
    #[serde(rename = "type")]
    pub channel_type: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
    /// Notifier-specific settings, passed through untouched.
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}
