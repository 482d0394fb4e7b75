//! Legacy alert notification channel endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::{decode_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::AlertChannel;

/// List all alert notification channels, in server order.
pub async fn list_alert_channels(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<AlertChannel>> {
    let url = format!("{}/api/alert-notifications", base_url);

    let builder = auth.apply(client.get(&url));
    let response = send_request(builder, "/api/alert-notifications", "GET", metrics).await?;

    decode_json(
        response,
        "/api/alert-notifications",
        "Vec<AlertChannel>",
        metrics,
    )
    .await
}
