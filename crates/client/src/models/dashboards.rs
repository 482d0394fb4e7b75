//! Dashboard models for the Grafana dashboard API.
//!
//! Grafana dashboard API endpoints:
//! - POST /api/dashboards/db
//! - DELETE /api/dashboards/uid/{uid}

use serde::{Deserialize, Serialize};

/// Body of a dashboard upsert request.
///
/// `dashboard` is whatever board JSON the caller built; the client only adds
/// the folder reference and the overwrite flag.
#[derive(Debug, Serialize)]
pub struct DashboardUpsertRequest<'a, D: Serialize + ?Sized> {
    pub dashboard: &'a D,
    #[serde(rename = "folderId")]
    pub folder_id: u64,
    pub overwrite: bool,
}

/// Server-assigned identifiers returned by a successful upsert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardUpsertResult {
    pub id: u64,
    pub uid: String,
    pub url: String,
    pub status: String,
    pub version: u64,
    #[serde(default)]
    pub slug: String,
}
