//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by status
//! - `gateway_request_duration_seconds` (histogram): request latency
//! - `gateway_cache_lookups_total` (counter): cache hits and misses
//! - `gateway_upstream_fetches_total` (counter): upstream outcomes
//! - `gateway_upstream_fetch_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Prometheus exposition on a separate listener, enabled by config
//! - Low-overhead updates via the metrics facade (atomic operations)

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("gateway_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "status" => status.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a cache lookup outcome.
pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    metrics::counter!("gateway_cache_lookups_total", "result" => result).increment(1);
}

/// Record an upstream fetch outcome and latency.
pub fn record_upstream_fetch(ok: bool, start: Instant) {
    let outcome = if ok { "ok" } else { "error" };
    metrics::counter!("gateway_upstream_fetches_total", "outcome" => outcome).increment(1);
    metrics::histogram!("gateway_upstream_fetch_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
