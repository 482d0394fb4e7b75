//! Dashboard endpoints.

use reqwest::Client;
use serde::Serialize;

use crate::auth::AuthStrategy;
use crate::endpoints::{decode_json, encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{DashboardUpsertRequest, DashboardUpsertResult};

/// Create or overwrite a dashboard inside the folder with ID `folder_id`.
pub async fn upsert_dashboard<D>(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    folder_id: u64,
    dashboard: &D,
    metrics: Option<&MetricsCollector>,
) -> Result<DashboardUpsertResult>
where
    D: Serialize + ?Sized,
{
    let url = format!("{}/api/dashboards/db", base_url);
    let body = DashboardUpsertRequest {
        dashboard,
        folder_id,
        overwrite: true,
    };

    let builder = auth.apply(client.post(&url).json(&body));
    let response = send_request(builder, "/api/dashboards/db", "POST", metrics).await?;

    decode_json(
        response,
        "/api/dashboards/db",
        "DashboardUpsertResult",
        metrics,
    )
    .await
}

/// Delete the dashboard with the given UID.
///
/// A 404 from Grafana is reported as [`ClientError::DashboardNotFound`].
pub async fn delete_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    uid: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!(
        "{}/api/dashboards/uid/{}",
        base_url,
        encode_path_segment(uid)
    );

    let builder = auth.apply(client.delete(&url));
    match send_request(builder, "/api/dashboards/uid/{uid}", "DELETE", metrics).await {
        Ok(_) => Ok(()),
        Err(ClientError::ApiError { status: 404, .. }) => Err(ClientError::DashboardNotFound),
        Err(e) => Err(e),
    }
}
