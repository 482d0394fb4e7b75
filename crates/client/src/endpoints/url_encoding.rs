//! Percent-encoding for caller-supplied URL path segments.
//!
//! Dashboard UIDs end up in request paths (`/api/dashboards/uid/{uid}`).
//! Grafana generates URL-safe UIDs, but callers may pass their own, so every
//! segment is encoded before interpolation.
//!
//! # Example
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("prod/overview"), "prod%2Foverview");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters that would change how the path is
/// resolved (`/`, `?`, `#`) or be decoded twice (`%`).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
