//! Failure taxonomy for the outbound search call.
//!
//! Every failure the proxy can hit collapses to the same caller-visible
//! envelope (500 + `[{"error": ...}]`); only the embedded message differs.
//! The display strings live here so the wording stays stable even if the
//! underlying HTTP client is swapped out.

use axum::http::StatusCode;
use thiserror::Error;

/// Reasons the outbound search call can fail.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Connection refused, reset, or timed out before a response arrived.
    #[error("upstream unavailable: {detail}")]
    UpstreamUnavailable { detail: String },

    /// Upstream answered with a non-2xx status. The status is recorded for
    /// diagnostics but never forwarded to the caller.
    #[error("upstream returned {status}")]
    UpstreamError { status: StatusCode },

    /// Upstream body was not a JSON array of objects.
    #[error("failed to decode upstream body: {detail}")]
    DecodeError { detail: String },
}
