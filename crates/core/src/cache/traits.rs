use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for the key-value cache sitting in front of the product store.
///
/// Implementations are expected to make `get` and `set` atomic per key and
/// to drop entries on their own once the TTL passes.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    ///
    /// The TTL is absolute: it counts from the write, not from the last read.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;
}
