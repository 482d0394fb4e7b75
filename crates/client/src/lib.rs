//! Grafana HTTP API client.
//!
//! This crate provides a type-safe async client for Grafana's administration
//! API: folders, dashboards and legacy alert notification channels. Lookups
//! by name list the resource and match names case-insensitively, reporting a
//! miss with a dedicated error variant:
//!
//! ```rust,no_run
//! use grafana_client::{ClientError, DashboardBuilder, GrafanaClient};
//!
//! # async fn run() -> grafana_client::Result<()> {
//! let client = GrafanaClient::new(reqwest::Client::new(), "http://localhost:3000", "glsa_token")?;
//!
//! let folder = match client.get_folder_by_title("Team A").await {
//!     Err(ClientError::FolderNotFound) => client.create_folder("Team A").await?,
//!     other => other?,
//! };
//!
//! let board = DashboardBuilder::new("Production overview").build();
//! client.upsert_dashboard(&folder, &board).await?;
//! # Ok(())
//! # }
//! ```

mod auth;
pub mod client;
pub mod dashboard;
pub mod endpoints;
pub mod error;
mod lookup;
pub mod metrics;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use dashboard::{Board, DashboardBuilder, TimeRange, Timezone};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    AlertChannel, CreateFolderParams, DashboardUpsertRequest, DashboardUpsertResult,
    ErrorEnvelope, Folder,
};
