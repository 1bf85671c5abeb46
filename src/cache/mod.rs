//! TTL key-value side-cache subsystem.
//!
//! # Data Flow
//! ```text
//! handler (cache-aside):
//!     get(key) → hit: serve stored body verbatim
//!              → miss/expired: fetch upstream, filter, set(key, body, ttl)
//!
//! Backends:
//!     redis.rs  — shared Redis store, expiry enforced by SETEX
//!     memory.rs — in-process store, expiry enforced on read
//! ```
//!
//! # Design Decisions
//! - get/set only; no scans, no invalidation API (entries age out)
//! - A miss and an expired entry are indistinguishable to callers
//! - Errors are transport-level only; callers decide whether to fail open

pub mod memory;
pub mod redis;
pub mod store;

pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use store::{CacheError, CacheResult, CacheStore};
