//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request against Grafana and
//! returns the decoded body. Credentials, base URL and metrics are passed in
//! by [`crate::GrafanaClient`].

mod alert_channels;
mod dashboards;
mod folders;
mod request;
pub mod url_encoding;

pub use alert_channels::list_alert_channels;
pub use dashboards::{delete_dashboard, upsert_dashboard};
pub use folders::{create_folder, list_folders};
pub use request::{decode_json, send_request};
pub use url_encoding::encode_path_segment;
