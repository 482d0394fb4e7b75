//! Request execution and response decoding shared by all endpoints.
//!
//! This module sends a prepared `reqwest::RequestBuilder` exactly once and
//! turns the outcome into the crate's error taxonomy:
//! - transport failures become `HttpError` (or `Timeout` when the deadline elapsed)
//! - non-2xx responses become `ApiError`, decoded from Grafana's error envelope
//! - bodies that do not match the expected schema become `InvalidResponse`
//!
//! No request is ever retried, whatever the status code.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ErrorEnvelope;

/// Map a transport error, distinguishing elapsed deadlines.
fn transport_error(error: reqwest::Error, endpoint: &str) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(endpoint.to_string())
    } else {
        ClientError::HttpError(error)
    }
}

/// Sends an HTTP request once and fails on any non-2xx status.
///
/// # Arguments
///
/// * `builder` - The request to execute, credentials already attached
/// * `endpoint` - Path template used for logging and metrics labels
/// * `method` - HTTP method, for metrics labels
/// * `metrics` - Optional collector for request metrics
///
/// # Errors
///
/// Returns `ClientError::ApiError` for non-2xx responses, `ClientError::Timeout`
/// when the transport deadline elapsed and `ClientError::HttpError` for other
/// transport failures.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = match builder.send().await {
        Ok(response) if response.status().is_success() => Ok(response),
        Ok(response) => Err(api_error(response).await),
        Err(e) => Err(transport_error(e, endpoint)),
    };

    debug!(
        endpoint,
        method,
        elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        ok = result.is_ok(),
        "Grafana request finished"
    );

    if let Some(m) = metrics {
        let status = match &result {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => e.status(),
        };
        m.record_request_duration(endpoint, method, start.elapsed(), status);
        if let Err(e) = &result {
            m.record_client_error(endpoint, method, e);
        }
    }

    result
}

/// Build an `ApiError` from a non-2xx response.
///
/// The body is decoded as an [`ErrorEnvelope`]. Its `status` is kept whenever
/// the envelope parses; when it carries no message, the raw body (or the
/// status reason) is used as the message.
async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (message, status_text) = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) if !envelope.message.is_empty() => {
            (Some(envelope.message), envelope.status)
        }
        Ok(envelope) => (None, envelope.status),
        Err(_) => (None, None),
    };

    let message = message.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no error message")
                .to_string()
        } else {
            trimmed.to_string()
        }
    });

    ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
        status_text,
    }
}

/// Decode a successful response body as JSON.
///
/// `model_type` names the expected type in errors and metrics.
pub async fn decode_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    model_type: &'static str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(e, endpoint))?;

    serde_json::from_slice(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, model_type);
        }
        ClientError::InvalidResponse(format!(
            "Failed to parse {} response from {}: {}",
            model_type, endpoint, e
        ))
    })
}
