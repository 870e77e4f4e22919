//! The forward-collect-decode pipeline for one search call.
//!
//! # Responsibilities
//! - Build the encoded outbound URL for the upstream search endpoint
//! - Log the outgoing request (method + URL) before dispatch
//! - Issue exactly one GET and await the full response
//! - Classify failures into the [`ProxyError`] taxonomy
//! - Decode the body as an opaque, order-preserving JSON array
//!
//! # Design Decisions
//! - Records are never inspected or reordered; they flow through verbatim
//! - The request timeout is enforced here so a hung upstream surfaces
//!   through the same failure envelope as any other transport error
//! - An empty array is a valid result, distinct from any failure

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use http_body_util::BodyExt;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use url::Url;

use crate::proxy::error::ProxyError;

/// Upstream search endpoint, relative to the configured base URL.
const SEARCH_PATH: &str = "/api/apps/search";

/// Ordered sequence of opaque upstream records.
pub type AppRecords = Vec<serde_json::Map<String, serde_json::Value>>;

/// Forwards search terms to the single configured upstream backend.
///
/// Holds the shared outbound client (and its connection pool); the proxy
/// itself is stateless across calls.
pub struct SearchProxy {
    client: Client<HttpConnector, Body>,
    base_url: Url,
    request_timeout: Duration,
}

impl SearchProxy {
    /// Create a proxy for the given upstream base URL.
    pub fn new(
        client: Client<HttpConnector, Body>,
        base_url: Url,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url,
            request_timeout,
        }
    }

    /// Upstream authority (host:port) used as a metrics label.
    pub fn upstream_authority(&self) -> String {
        match (self.base_url.host_str(), self.base_url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            _ => "unknown".to_string(),
        }
    }

    /// Build the outbound URL, URL-encoding the term. The search path is
    /// appended to any path prefix on the base URL, not substituted for it.
    fn search_url(&self, term: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path().trim_end_matches('/'), SEARCH_PATH);
        url.set_path(&path);
        url.query_pairs_mut().clear().append_pair("term", term);
        url
    }

    /// Issue one GET to the upstream search endpoint and collect the
    /// response as a list of opaque records.
    pub async fn search(&self, term: &str) -> Result<AppRecords, ProxyError> {
        let url = self.search_url(term);

        tracing::info!(method = "GET", url = %url, "Forwarding search to upstream");

        let request = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .map_err(|e| ProxyError::UpstreamUnavailable {
                detail: e.to_string(),
            })?;

        let call = async {
            let response = self.client.request(request).await.map_err(|e| {
                ProxyError::UpstreamUnavailable {
                    detail: e.to_string(),
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProxyError::UpstreamError { status });
            }

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| ProxyError::UpstreamUnavailable {
                    detail: e.to_string(),
                })?
                .to_bytes();

            serde_json::from_slice(&body).map_err(|e| ProxyError::DecodeError {
                detail: e.to_string(),
            })
        };

        // A hung upstream must surface as a normal transport failure, so
        // the deadline covers the request and the body collection together.
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::UpstreamUnavailable {
                detail: format!(
                    "no response within {}s",
                    self.request_timeout.as_secs()
                ),
            }),
        }
    }
}
