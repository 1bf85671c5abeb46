//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, CORS)
//! - Bind server to listener
//! - Run until the shutdown signal
//!
//! # Design Decisions
//! - Cache store and upstream source are injected as trait objects; the
//!   server owns no I/O clients of its own
//! - CORS is permissive when enabled: the API serves browser storefronts
//!   on other origins and exposes nothing privileged

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::cache::CacheStore;
use crate::catalog::CategorySource;
use crate::config::GatewayConfig;
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn CacheStore>,
    pub source: Arc<dyn CategorySource>,
    pub cache_ttl: Duration,
}

/// HTTP server for the category gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from the configuration and its collaborators.
    pub fn new(
        config: &GatewayConfig,
        source: Arc<dyn CategorySource>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        let state = AppState {
            cache,
            source,
            cache_ttl: Duration::from_secs(config.cache.ttl_secs),
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/api/categories", get(handlers::get_categories))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.http.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        if config.http.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
