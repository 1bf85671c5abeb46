//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and URLs actually parse
//! - Validate value ranges (TTL and timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. "upstream.graphql_url".
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a valid socket address: {:?}", config.listener.bind_address),
        });
    }

    match url::Url::parse(&config.upstream.graphql_url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
        Ok(parsed) => errors.push(ValidationError {
            field: "upstream.graphql_url",
            message: format!("unsupported scheme {:?}, expected http or https", parsed.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "upstream.graphql_url",
            message: format!("not a valid URL: {e}"),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "upstream.timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.cache.ttl_secs == 0 {
        errors.push(ValidationError {
            field: "cache.ttl_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if let Some(redis_url) = &config.cache.redis_url {
        match url::Url::parse(redis_url) {
            Ok(parsed) if parsed.scheme() == "redis" || parsed.scheme() == "rediss" => {}
            Ok(parsed) => errors.push(ValidationError {
                field: "cache.redis_url",
                message: format!("unsupported scheme {:?}, expected redis or rediss", parsed.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field: "cache.redis_url",
                message: format!("not a valid URL: {e}"),
            }),
        }
    }

    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "http.request_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address",
            message: format!(
                "not a valid socket address: {:?}",
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
