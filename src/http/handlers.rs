//! Request handlers for the gateway API.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::time::Instant;

use crate::catalog::filter_menu_visible;
use crate::http::server::AppState;
use crate::observability::metrics;

/// The single cache key: there is exactly one category tree.
pub const CACHE_KEY: &str = "categories";

#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// `GET /api/categories`.
///
/// Cache-aside over the upstream fetch. Cached entries hold the fully
/// filtered, serialized body and are returned verbatim; on a miss the
/// handler fetches, prunes to menu-visible nodes, drops the synthetic root,
/// caches best-effort and responds. Upstream failure is a 500 with the
/// normalized message; no retry, no stale fallback.
pub async fn get_categories(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    // A cache transport failure is deliberately treated as a miss: the
    // upstream fetch path stays available while the store is down.
    match state.cache.get(CACHE_KEY).await {
        Ok(Some(body)) => {
            metrics::record_cache_lookup(true);
            metrics::record_request(200, start);
            tracing::debug!(cache_key = CACHE_KEY, "serving categories from cache");
            return json_response(body);
        }
        Ok(None) => {
            metrics::record_cache_lookup(false);
        }
        Err(e) => {
            metrics::record_cache_lookup(false);
            tracing::warn!(error = %e, "cache lookup failed, falling through to upstream");
        }
    }

    let fetch_start = Instant::now();
    let raw = match state.source.fetch_categories().await {
        Ok(categories) => {
            metrics::record_upstream_fetch(true, fetch_start);
            categories
        }
        Err(e) => {
            metrics::record_upstream_fetch(false, fetch_start);
            metrics::record_request(500, start);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let filtered = filter_menu_visible(raw);

    // The fetched tree is rooted at a synthetic "Default Category" node;
    // clients only ever see its children.
    let top_level = filtered
        .into_iter()
        .next()
        .map(|root| root.children)
        .unwrap_or_default();

    let body = match serde_json::to_string(&top_level) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize category response");
            metrics::record_request(500, start);
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response();
        }
    };

    // Best-effort write: the response is already computed, a failing store
    // must not fail the request.
    if let Err(e) = state.cache.set(CACHE_KEY, &body, state.cache_ttl).await {
        tracing::warn!(error = %e, "cache write failed, serving response anyway");
    }

    metrics::record_request(200, start);
    json_response(body)
}

fn json_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheError, CacheResult, CacheStore, MemoryStore};
    use crate::catalog::{Category, CategorySource, UpstreamError, UpstreamResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct StaticSource {
        categories: Vec<Category>,
        calls: AtomicU32,
    }

    impl StaticSource {
        fn new(categories: Vec<Category>) -> Self {
            Self {
                categories,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl CategorySource for StaticSource {
        async fn fetch_categories(&self) -> UpstreamResult<Vec<Category>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.categories.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CategorySource for FailingSource {
        async fn fetch_categories(&self) -> UpstreamResult<Vec<Category>> {
            Err(UpstreamError::Fetch)
        }
    }

    struct FailingCache;

    #[async_trait]
    impl CacheStore for FailingCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
            Err(CacheError::Transport("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
            Err(CacheError::Transport("connection refused".to_string()))
        }
    }

    fn category(id: u64, name: &str, include_in_menu: i64, children: Vec<Category>) -> Category {
        Category {
            id,
            name: name.to_string(),
            url_key: Some(name.to_lowercase()),
            include_in_menu,
            children,
        }
    }

    fn default_tree() -> Vec<Category> {
        vec![category(
            1,
            "Default Category",
            1,
            vec![
                category(2, "Shoes", 1, vec![]),
                category(3, "Hidden", 0, vec![]),
            ],
        )]
    }

    fn state(source: Arc<dyn CategorySource>, cache: Arc<dyn CacheStore>) -> AppState {
        AppState {
            cache,
            source,
            cache_ttl: Duration::from_secs(3600),
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_miss_fetches_filters_and_caches() {
        let source = Arc::new(StaticSource::new(default_tree()));
        let cache = Arc::new(MemoryStore::new());

        let response = get_categories(State(state(source.clone(), cache.clone()))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let parsed: Vec<Category> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Shoes");

        // The stored entry is the response body itself, post-filter.
        let cached = cache.get(CACHE_KEY).await.unwrap();
        assert_eq!(cached.as_deref(), Some(body.as_str()));
    }

    #[tokio::test]
    async fn test_hit_serves_cached_body_without_fetching() {
        let source = Arc::new(StaticSource::new(default_tree()));
        let cache = Arc::new(MemoryStore::new());
        cache
            .set(CACHE_KEY, r#"[{"cached":true}]"#, Duration::from_secs(60))
            .await
            .unwrap();

        let response = get_categories(State(state(source.clone(), cache))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"[{"cached":true}]"#);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_and_skips_cache_write() {
        let cache = Arc::new(MemoryStore::new());

        let response = get_categories(State(state(Arc::new(FailingSource), cache.clone()))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_string(response).await;
        assert_eq!(body, "error fetching categories from upstream");
        assert!(cache.get(CACHE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cache_failure_falls_through_to_upstream() {
        let source = Arc::new(StaticSource::new(default_tree()));

        let response = get_categories(State(state(source.clone(), Arc::new(FailingCache)))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        let parsed: Vec<Category> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(parsed[0].name, "Shoes");
    }

    #[tokio::test]
    async fn test_filtered_root_yields_empty_body() {
        // Root itself hidden: nothing to expose.
        let source = Arc::new(StaticSource::new(vec![category(
            1,
            "Default Category",
            0,
            vec![category(2, "Shoes", 1, vec![])],
        )]));
        let cache = Arc::new(MemoryStore::new());

        let response = get_categories(State(state(source, cache))).await;
        assert_eq!(body_string(response).await, "[]");
    }
}
