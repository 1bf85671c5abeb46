//! Cache store contract and errors.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by cache backends.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The store is unreachable or answered with a protocol error.
    /// Never raised for a plain miss.
    #[error("cache transport error: {0}")]
    Transport(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// A TTL-expiring key-value store used as a side-cache in front of
/// expensive idempotent fetches.
///
/// Values are opaque serialized strings; the key space is caller-defined.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a key. Resolves to `Ok(None)` on miss or after expiry; an
    /// entry is never returned past its expiration instant.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a value under `key`, overwriting any prior entry, expiring
    /// `ttl` in the future.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;
}
