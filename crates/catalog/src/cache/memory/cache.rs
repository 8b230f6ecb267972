//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using
//! tokio synchronization primitives and LRU eviction policy.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use catalog_core::cache::{Cache, CacheError, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    /// Creates a new cache entry with optional TTL.
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    /// Returns true if this entry has expired.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// `LruCache::get` reorders entries, so even reads take the lock exclusively.
/// Expired entries are removed lazily when they are next read.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<Mutex<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            CacheError::OperationFailed("max_entries must be greater than 0".to_string())
        })?;
        Ok(Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }

    /// Returns the number of entries currently held, expired or not.
    #[cfg(test)]
    async fn len(&self) -> usize {
        self.store.lock().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.lock().await;

        match store.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
            Some(_) => {}
            None => return Ok(None),
        }

        // Expired: drop it so it stops counting against capacity
        store.pop(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.lock().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }
}
