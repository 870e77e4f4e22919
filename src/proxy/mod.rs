//! Search proxy subsystem.
//!
//! # Data Flow
//! ```text
//! handler (http/server.rs)
//!     → search.rs (build outbound URL, issue GET, collect body)
//!     → error.rs (classify transport/status/decode failures)
//!     → back to handler (envelope decision: 200 / 404 policy / 500)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per inbound call; no retries, no fan-out
//! - Upstream records are opaque; only the count (empty vs non-empty) matters
//! - Failure wording is owned by the error taxonomy, not the HTTP client

pub mod error;
pub mod search;

pub use error::ProxyError;
pub use search::{AppRecords, SearchProxy};
