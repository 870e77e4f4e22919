//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): total requests by method, status, upstream
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recording is a no-op until an exporter is installed, so handlers can
//!   record unconditionally

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and serve scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one completed gateway request.
pub fn record_request(method: &str, status: u16, upstream: &str, start_time: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "upstream" => upstream.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "gateway_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "upstream" => upstream.to_string()
    )
    .record(start_time.elapsed().as_secs_f64());
}
