//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, search handler)
//!     → request.rs (add request ID)
//!     → [proxy forwards to the upstream backend]
//!     → server.rs (envelope decision)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
