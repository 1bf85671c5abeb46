//! Upstream GraphQL client for the category tree.
//!
//! # Responsibilities
//! - Issue the fixed `categoryList` query against the configured endpoint
//! - Collapse transport and shape failures into one normalized error
//! - Log the underlying cause server-side; never leak it to callers
//!
//! # Design Decisions
//! - TLS certificate verification is disabled when the config says so; the
//!   original deployment talks to a storefront with a self-signed chain and
//!   this is an explicit, configurable trust decision (see config docs)
//! - No retries and no failover: one POST per fetch, callers cache the result

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::types::{Category, UpstreamError, UpstreamResult};
use crate::config::UpstreamConfig;

/// The one query this service ever sends: two levels of the category tree,
/// menu-relevant fields only.
const CATEGORY_QUERY: &str = "\
{
  categoryList {
    id
    name
    url_key
    include_in_menu
    children {
      id
      name
      url_key
      include_in_menu
    }
  }
}";

/// Source of raw (unfiltered) category trees.
///
/// Handlers depend on this trait rather than a concrete client so tests can
/// substitute fakes.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch the full category tree, synthetic root included.
    async fn fetch_categories(&self) -> UpstreamResult<Vec<Category>>;
}

/// Production [`CategorySource`] speaking GraphQL over HTTP.
pub struct GraphqlCategorySource {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<CategoryListData>,
}

#[derive(Deserialize)]
struct CategoryListData {
    #[serde(rename = "categoryList")]
    category_list: Option<Vec<Category>>,
}

impl GraphqlCategorySource {
    /// Build a client for the configured endpoint.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        if config.danger_accept_invalid_certs {
            tracing::warn!(
                endpoint = %config.graphql_url,
                "TLS certificate verification is DISABLED for upstream requests"
            );
        }

        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.graphql_url.clone(),
        })
    }
}

#[async_trait]
impl CategorySource for GraphqlCategorySource {
    async fn fetch_categories(&self) -> UpstreamResult<Vec<Category>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching categories from upstream");

        let response = match self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": CATEGORY_QUERY }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "upstream request failed");
                return Err(UpstreamError::Fetch);
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "upstream returned an error status");
                return Err(UpstreamError::Fetch);
            }
        };

        let payload: GraphqlResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "failed to decode upstream response");
                return Err(UpstreamError::Fetch);
            }
        };

        match payload.data.and_then(|d| d.category_list) {
            Some(categories) => {
                tracing::debug!(count = categories.len(), "fetched category tree");
                Ok(categories)
            }
            None => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    "upstream response missing data.categoryList"
                );
                Err(UpstreamError::Fetch)
            }
        }
    }
}

impl std::fmt::Debug for GraphqlCategorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlCategorySource")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
