//! Category tree types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single node in the product-category tree.
///
/// The upstream always returns one synthetic "Default Category" root whose
/// `children` hold the real top-level categories. `children` may be absent
/// in the payload for leaf nodes and defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Upstream category id.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// URL slug; null for the synthetic root.
    pub url_key: Option<String>,

    /// Menu visibility flag: 1 = shown in menus, 0 = hidden.
    pub include_in_menu: i64,

    /// Child categories, in upstream order.
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Errors that can occur talking to the upstream catalog service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Any transport failure or unexpected response shape.
    ///
    /// Deliberately carries no detail: callers must not branch on whether a
    /// fetch failed due to a network error or a malformed payload. The
    /// underlying cause is logged where it occurs.
    #[error("error fetching categories from upstream")]
    Fetch,

    /// The HTTP client could not be constructed (startup only).
    #[error("failed to build upstream client: {0}")]
    Client(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
