//! In-process cache backend.
//!
//! Default backend when no Redis URL is configured, and the store handed to
//! handlers in tests. Expiry is enforced on read: an entry found past its
//! deadline is removed and reported as a miss.

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::cache::store::{CacheResult, CacheStore};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe in-memory TTL store.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        // The read guard must be released before removal; DashMap locks
        // per-shard.
        match self.entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Ok(Some(entry.value.clone()));
            }
            Some(_) => {}
            None => return Ok(None),
        }

        self.entries.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_within_ttl() {
        let store = MemoryStore::new();
        store
            .set("categories", "[1,2,3]", Duration::from_secs(60))
            .await
            .unwrap();

        let value = store.get("categories").await.unwrap();
        assert_eq!(value.as_deref(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent() {
        let store = MemoryStore::new();
        store
            .set("categories", "[]", Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(store.get("categories").await.unwrap().is_none());
        // The expired entry is discarded by the read, not just hidden.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "old", Duration::from_secs(60)).await.unwrap();
        store.set("k", "new", Duration::from_secs(60)).await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }
}
