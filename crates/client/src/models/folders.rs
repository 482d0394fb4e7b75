//! Folder models for the Grafana folder API.
//!
//! Grafana folder API endpoints:
//! - POST /api/folders
//! - GET /api/folders

use serde::{Deserialize, Serialize};

/// A named container for dashboards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Numeric ID, used to attach dashboards to the folder.
    pub id: u64,
    #[serde(default)]
    pub uid: String,
    pub title: String,
}

/// Body of a folder creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFolderParams<'a> {
    pub title: &'a str,
}
