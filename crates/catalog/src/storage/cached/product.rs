//! Cached product repository decorator.
//!
//! Wraps a `ProductRepository` implementation with the cache-aside pattern.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use catalog_core::cache::{deserialize_products, serialize_products, Cache, PRODUCTS_ALL_KEY};
use catalog_core::catalog::Product;
use catalog_core::storage::{ProductRepository, Result};

/// Cached product repository decorator.
///
/// The whole catalog lives under one cache key. A read returns the cached
/// catalog only when it decodes to a non-empty list; anything else (no entry,
/// an empty list, undecodable bytes, a cache error) falls through to the
/// wrapped repository and rewrites the entry with a fresh TTL.
///
/// An empty catalog is therefore never served from the cache: it is written
/// like any other result but re-fetched from the store on every call.
///
/// Cache failures never fail a read. Store failures are returned unchanged.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedProductRepository<R, C>
where
    R: ProductRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedProductRepository<R, C>
where
    R: ProductRepository,
    C: Cache,
{
    /// Creates a new cached product repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Absolute expiration for the cached catalog
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Reads the cached catalog, treating every failure as a miss.
    async fn read_cached(&self) -> Option<Vec<Product>> {
        let bytes = match self.cache.get(PRODUCTS_ALL_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = PRODUCTS_ALL_KEY, error = %err, "Cache read failed");
                return None;
            }
        };

        match deserialize_products(&bytes) {
            Ok(products) if !products.is_empty() => Some(products),
            Ok(_) => None,
            Err(err) => {
                // Deserialization failed - treat as cache miss
                tracing::warn!(
                    key = PRODUCTS_ALL_KEY,
                    error = %err,
                    "Cache catalog deserialization failed"
                );
                None
            }
        }
    }

    /// Writes the catalog to the cache. Failures are logged and dropped.
    async fn write_cached(&self, products: &[Product]) {
        let bytes = match serialize_products(products) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    key = PRODUCTS_ALL_KEY,
                    error = %err,
                    "Failed to serialize catalog"
                );
                return;
            }
        };

        if let Err(err) = self
            .cache
            .set(PRODUCTS_ALL_KEY, &bytes, Some(self.ttl))
            .await
        {
            tracing::warn!(key = PRODUCTS_ALL_KEY, error = %err, "Failed to cache catalog");
        }
    }
}

#[async_trait]
impl<R, C> ProductRepository for CachedProductRepository<R, C>
where
    R: ProductRepository + 'static,
    C: Cache + 'static,
{
    async fn get_all(&self) -> Result<Vec<Product>> {
        if let Some(products) = self.read_cached().await {
            tracing::trace!(count = products.len(), "Cache hit for catalog");
            return Ok(products);
        }

        // Cache miss - fetch from repository
        tracing::trace!("Cache miss for catalog");
        let products = self.repository.get_all().await?;

        self.write_cached(&products).await;

        Ok(products)
    }
}
