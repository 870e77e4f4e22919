//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared with the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::EmptyResultPolicy;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::SearchConfig;
pub use schema::TimeoutConfig;
pub use schema::UpstreamConfig;
