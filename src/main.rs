//! Category Gateway
//!
//! A small caching proxy in front of an e-commerce GraphQL catalog, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │               CATEGORY GATEWAY                │
//!                      │                                               │
//!   GET /api/categories│  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│  cache   │──▶│  catalog  │──┼──▶ Upstream
//!                      │  │ server  │   │ (redis / │   │ upstream  │  │    GraphQL
//!                      │  └─────────┘   │  memory) │   │  client   │  │    endpoint
//!                      │                └──────────┘   └─────┬─────┘  │
//!                      │                                     │        │
//!                      │                               ┌─────▼─────┐  │
//!   JSON response      │                               │  catalog  │  │
//!   ◀──────────────────┼───────────────────────────────│  filter   │  │
//!                      │                               └───────────┘  │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns           │ │
//!                      │  │  ┌────────┐ ┌─────────────────────────┐ │ │
//!                      │  │  │ config │ │ observability (logs,     │ │ │
//!                      │  │  │        │ │ metrics, request IDs)    │ │ │
//!                      │  │  └────────┘ └─────────────────────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use category_gateway::cache::{CacheStore, MemoryStore, RedisStore};
use category_gateway::catalog::GraphqlCategorySource;
use category_gateway::config::{load_config, GatewayConfig};
use category_gateway::observability::{logging, metrics};
use category_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "category-gateway")]
#[command(about = "Caching gateway for an e-commerce category tree", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("category-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        graphql_url = %config.upstream.graphql_url,
        cache_backend = if config.cache.redis_url.is_some() { "redis" } else { "memory" },
        cache_ttl_secs = config.cache.ttl_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Collaborators are constructed here and injected; handlers never reach
    // for globals.
    let cache: Arc<dyn CacheStore> = match &config.cache.redis_url {
        Some(url) => Arc::new(RedisStore::connect(url).await?),
        None => {
            tracing::info!("no redis_url configured, using in-process cache");
            Arc::new(MemoryStore::new())
        }
    };

    let source = Arc::new(GraphqlCategorySource::new(&config.upstream)?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(&config, source, cache);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
