//! Redis cache backend.
//!
//! Expiry is enforced by the store itself (`SETEX`); this backend never
//! inspects timestamps. All failures map to [`CacheError::Transport`].

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;

use crate::cache::store::{CacheError, CacheResult, CacheStore};

/// Cache backend over a shared Redis instance.
///
/// `ConnectionManager` multiplexes one connection and reconnects on failure,
/// so the store is cheap to clone into handler state.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    url: String,
}

impl RedisStore {
    /// Connect to the Redis instance at `url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::Transport(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Transport(e.to_string()))?;

        tracing::info!(url = %url, "connected to redis cache");

        Ok(Self {
            conn,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| CacheError::Transport(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| CacheError::Transport(e.to_string()))
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").field("url", &self.url).finish()
    }
}
