//! Folder API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Creating folders
//! - Listing folders and resolving a folder by title
//! - The find-or-create flow used when provisioning dashboards
//!
//! # What this module does NOT handle:
//! - Low-level folder endpoint HTTP calls (in [`crate::endpoints`])

use tracing::debug;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::lookup::find_by_name;
use crate::models::Folder;

impl GrafanaClient {
    /// Create a folder with the given title.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ApiError` when Grafana rejects the request, for
    /// example because a folder with the same title already exists.
    pub async fn create_folder(&self, title: &str) -> Result<Folder> {
        debug!(title, "Creating folder");
        endpoints::create_folder(
            &self.http,
            &self.base_url,
            &self.auth,
            title,
            self.metrics.as_ref(),
        )
        .await
    }

    /// List folders in server order.
    pub async fn list_folders(&self) -> Result<Vec<Folder>> {
        endpoints::list_folders(&self.http, &self.base_url, &self.auth, self.metrics.as_ref())
            .await
    }

    /// Find a folder by title, ignoring case.
    ///
    /// The whole title must match; `"Test"` does not find `"Test folder"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::FolderNotFound`] when the listing succeeded but no
    /// folder matched. A failed listing is returned as is and never reported
    /// as not found.
    pub async fn get_folder_by_title(&self, title: &str) -> Result<Folder> {
        let folders = self.list_folders().await?;
        let count = folders.len();

        match find_by_name(folders, title) {
            Some(folder) => {
                debug!(title, id = folder.id, "Folder found");
                Ok(folder)
            }
            None => {
                debug!(title, searched = count, "No folder matched");
                Err(ClientError::FolderNotFound)
            }
        }
    }

    /// Return the folder with the given title, creating it if missing.
    ///
    /// Any lookup error other than [`ClientError::FolderNotFound`] is returned
    /// without attempting creation.
    pub async fn find_or_create_folder(&self, title: &str) -> Result<Folder> {
        match self.get_folder_by_title(title).await {
            Err(ClientError::FolderNotFound) => self.create_folder(title).await,
            other => other,
        }
    }
}
