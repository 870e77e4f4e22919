//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream base URL is a usable http/https URL
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug)]
pub struct ValidationError {
    /// Config field the problem was found in (e.g., "upstream.base_url").
    pub field: &'static str,

    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError {
            field: "listener.max_connections",
            message: "must be greater than zero".to_string(),
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError {
                    field: "upstream.base_url",
                    message: format!("unsupported scheme: {}", url.scheme()),
                });
            } else if url.host_str().is_none() {
                errors.push(ValidationError {
                    field: "upstream.base_url",
                    message: "missing host".to_string(),
                });
            }
        }
        Err(e) => {
            errors.push(ValidationError {
                field: "upstream.base_url",
                message: format!("not a valid URL: {e}"),
            });
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.connect_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address",
            message: format!(
                "not a valid socket address: {}",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
