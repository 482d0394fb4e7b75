//! Folder endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::{decode_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{CreateFolderParams, Folder};
use grafana_config::constants::DEFAULT_FOLDER_LIST_LIMIT;

/// Create a folder with the given title.
pub async fn create_folder(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    title: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Folder> {
    let url = format!("{}/api/folders", base_url);

    let builder = auth.apply(client.post(&url).json(&CreateFolderParams { title }));
    let response = send_request(builder, "/api/folders", "POST", metrics).await?;

    decode_json(response, "/api/folders", "Folder", metrics).await
}

/// List folders visible to the caller, in server order.
///
/// At most [`DEFAULT_FOLDER_LIST_LIMIT`] folders are requested.
pub async fn list_folders(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Folder>> {
    let url = format!("{}/api/folders", base_url);

    let builder = auth.apply(
        client
            .get(&url)
            .query(&[("limit", DEFAULT_FOLDER_LIST_LIMIT.to_string())]),
    );
    let response = send_request(builder, "/api/folders", "GET", metrics).await?;

    decode_json(response, "/api/folders", "Vec<Folder>", metrics).await
}
