//! Data models for Grafana API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod alert_channels;
pub mod common;
pub mod dashboards;
pub mod folders;

pub use alert_channels::AlertChannel;
pub use common::ErrorEnvelope;
pub use dashboards::{DashboardUpsertRequest, DashboardUpsertResult};
pub use folders::{CreateFolderParams, Folder};
