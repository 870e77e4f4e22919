//! App-search API gateway.
//!
//! A single-route HTTP gateway built with Tokio and Axum: it accepts an
//! inbound search request, forwards the term to one upstream backend,
//! collects the upstream's JSON array response, and re-shapes result and
//! failure into a gateway-level HTTP response.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌─────────────────────────────────────────────┐
//!                       │                  GATEWAY                     │
//!                       │                                              │
//!   GET /api/gateway/   │  ┌─────────┐    ┌──────────────┐            │
//!   apps/search?term=.. │  │  http   │───▶│  SearchProxy │────────────┼──▶ upstream
//!   ────────────────────┼─▶│ server  │    │ (one GET per │            │    /api/apps/search
//!                       │  └─────────┘    │ inbound call)│            │
//!                       │       ▲         └──────┬───────┘            │
//!   200 records /       │       │                │                    │
//!   200 [] / 500 error  │  ┌────┴─────┐   ┌──────▼───────┐            │
//!   ◀───────────────────┼──│ envelope │◀──│ error        │            │
//!                       │  │ decision │   │ taxonomy     │            │
//!                       │  └──────────┘   └──────────────┘            │
//!                       │                                              │
//!                       │  ┌────────────────────────────────────────┐ │
//!                       │  │        Cross-Cutting Concerns           │ │
//!                       │  │  config │ observability │ lifecycle     │ │
//!                       │  └────────────────────────────────────────┘ │
//!                       └─────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use proxy::{ProxyError, SearchProxy};
