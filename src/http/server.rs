//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the gateway route
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch the search handler and apply the response envelopes
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use url::Url;

use crate::config::{EmptyResultPolicy, GatewayConfig};
use crate::http::request::RequestIdLayer;
use crate::observability::metrics;
use crate::proxy::SearchProxy;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<SearchProxy>,
    pub empty_result: EmptyResultPolicy,
    pub upstream: String,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only when the configured upstream base URL does not parse;
    /// `validate_config` catches this earlier for file-loaded configs.
    pub fn new(config: GatewayConfig) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&config.upstream.base_url)?;

        // Outbound client; connect timeout lives on the connector.
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(config.timeouts.connect_secs)));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        let proxy = Arc::new(SearchProxy::new(
            client,
            base_url,
            Duration::from_secs(config.timeouts.request_secs),
        ));
        let upstream = proxy.upstream_authority();

        let state = AppState {
            proxy,
            empty_result: config.search.empty_result,
            upstream,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The proxy enforces the request timeout itself so a hung upstream
    /// gets the failure envelope; the timeout layer here is an outer
    /// backstop one second behind it. The global concurrency limit caps
    /// in-flight requests at `listener.max_connections`.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/gateway/apps/search", get(search_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs + 1,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Query parameters for the gateway search route. A missing `term` is
/// rejected by the extractor; empty or odd terms are forwarded as-is.
#[derive(Debug, Deserialize)]
struct SearchParams {
    term: String,
}

/// Gateway search handler.
///
/// Forwards the term upstream and applies the response envelope: the
/// upstream records verbatim on success, the configured empty-result
/// policy for a zero-length result set, and a 500 error envelope for any
/// failure. Upstream status codes are never forwarded to the caller.
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let start_time = Instant::now();

    match state.proxy.search(&params.term).await {
        Ok(records) => {
            if records.is_empty() && state.empty_result == EmptyResultPolicy::NotFound {
                metrics::record_request("GET", 404, &state.upstream, start_time);
                let body = json!([{
                    "message": format!("No results found for search term: {}", params.term)
                }]);
                return (StatusCode::NOT_FOUND, Json(body)).into_response();
            }

            metrics::record_request("GET", 200, &state.upstream, start_time);
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(e) => {
            tracing::error!(
                term = %params.term,
                error = %e,
                "Upstream search failed"
            );
            metrics::record_request("GET", 500, &state.upstream, start_time);
            let body = json!([{
                "error": format!("Internal Server Error: {e}")
            }]);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Resolve when either Ctrl+C or the shutdown coordinator fires.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if result.is_err() {
                tracing::error!("Failed to install Ctrl+C handler");
            }
        }
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
