//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Creating or overwriting dashboards inside a folder
//! - Deleting dashboards by UID
//!
//! # What this module does NOT handle:
//! - Building the dashboard JSON (see [`crate::dashboard::DashboardBuilder`],
//!   or pass any serializable value)

use serde::Serialize;
use tracing::debug;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardUpsertResult, Folder};

impl GrafanaClient {
    /// Create or overwrite `dashboard` inside `folder`.
    ///
    /// The request always sets `overwrite: true`. Grafana still rejects
    /// stale versions, which surface as `ClientError::ApiError`.
    pub async fn upsert_dashboard<D>(
        &self,
        folder: &Folder,
        dashboard: &D,
    ) -> Result<DashboardUpsertResult>
    where
        D: Serialize + ?Sized,
    {
        debug!(folder_id = folder.id, folder = %folder.title, "Upserting dashboard");
        endpoints::upsert_dashboard(
            &self.http,
            &self.base_url,
            &self.auth,
            folder.id,
            dashboard,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Delete the dashboard with the given UID.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::DashboardNotFound`](crate::ClientError::DashboardNotFound)
    /// when no dashboard has this UID.
    pub async fn delete_dashboard(&self, uid: &str) -> Result<()> {
        debug!(uid, "Deleting dashboard");
        endpoints::delete_dashboard(
            &self.http,
            &self.base_url,
            &self.auth,
            uid,
            self.metrics.as_ref(),
        )
        .await
    }
}
