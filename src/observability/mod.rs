//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log lines via the trace layer
//! - Metrics are cheap (atomic increments)
//! - Failure logging is fire-and-forget; it can never fail a response

pub mod logging;
pub mod metrics;
