//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber exactly once at startup
//! - Respect `RUST_LOG` over the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Log level comes from config; the environment always wins

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `default_level` applies to this crate and tower_http when `RUST_LOG` is
/// not set.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "category_gateway={default_level},tower_http={default_level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
