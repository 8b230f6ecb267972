//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see a `ProductRepository` trait object;
//! which store and cache sit behind it is decided here via feature flags.

use std::sync::Arc;

use catalog_core::cache::Cache;
use catalog_core::storage::{ProductRepository, ProductStore};

use crate::config::Config;
use crate::seed::seed_if_empty;
use crate::storage::cached::CachedProductRepository;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Product repository (cached, wraps underlying storage).
    pub product_repo: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Creates a new AppState around an already assembled repository.
    pub fn build(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// Seeds `store`, wraps it in the caching decorator and builds the state.
    async fn assemble<S, C>(store: Arc<S>, cache: Arc<C>, config: &Config) -> anyhow::Result<Self>
    where
        S: ProductStore + 'static,
        C: Cache + 'static,
    {
        seed_if_empty(store.as_ref()).await?;

        tracing::info!(
            ttl_seconds = config.cache_ttl_seconds,
            "Catalog cache configured"
        );

        let cached_repo = CachedProductRepository::new(store, cache, config.cache_ttl());
        Ok(Self::build(Arc::new(cached_repo)))
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries)?);

            Self::assemble(inmemory_repo, memory_cache, config).await
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Self::assemble(inmemory_repo, redis_cache, config).await
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries)?);

            Self::assemble(sqlite_repo, memory_cache, config).await
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Self::assemble(sqlite_repo, redis_cache, config).await
        }
    }
}

#[cfg(all(test, feature = "inmemory", feature = "memory"))]
mod tests {
    use super::*;
    use catalog_core::catalog::generate_seed_products;

    fn test_config() -> Config {
        Config {
            cache_ttl_seconds: 1800,
            cache_max_entries: 10,
            sqlite_path: "unused.db".to_string(),
            redis_url: "redis://unused".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_seeds_and_serves_catalog() {
        let state = AppState::new(&test_config()).await.unwrap();

        let products = state.product_repo.get_all().await.unwrap();

        assert_eq!(products, generate_seed_products());
    }

    #[tokio::test]
    async fn test_new_rejects_zero_cache_capacity() {
        let config = Config {
            cache_max_entries: 0,
            ..test_config()
        };

        assert!(AppState::new(&config).await.is_err());
    }
}
