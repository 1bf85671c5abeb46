//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging with fields for machine parsing
//! - Request IDs injected by middleware flow through the trace layer
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
