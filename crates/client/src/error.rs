//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The request did not complete before the transport deadline.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Non-2xx response from Grafana, decoded from its error envelope.
    #[error("API error ({status}) at {url}: {message}{}", .status_text.as_ref().map(|s| format!(" [{s}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        status_text: Option<String>,
    },

    /// The folder listing succeeded but no folder has the requested title.
    #[error("folder not found")]
    FolderNotFound,

    /// The alert channel listing succeeded but no channel has the requested name.
    #[error("alert channel not found")]
    AlertChannelNotFound,

    /// No dashboard exists with the requested UID.
    #[error("dashboard not found")]
    DashboardNotFound,

    /// Response body did not match the expected schema.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is one of the not-found sentinels.
    ///
    /// Listing failures are never reported as not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FolderNotFound | Self::AlertChannelNotFound | Self::DashboardNotFound
        )
    }

    /// HTTP status of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
