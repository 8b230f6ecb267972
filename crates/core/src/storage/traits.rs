use async_trait::async_trait;

use crate::catalog::Product;

use super::Result;

/// Read access to the product catalog.
///
/// Both the store-backed repositories and the caching decorator implement
/// this trait, so callers cannot tell them apart.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets every product in the catalog.
    async fn get_all(&self) -> Result<Vec<Product>>;
}

/// A backing store that can be seeded at startup.
///
/// Only store-backed repositories implement this; the request path never
/// writes, so the caching decorator does not.
#[async_trait]
pub trait ProductStore: ProductRepository {
    /// Returns the number of stored products.
    async fn count(&self) -> Result<usize>;

    /// Inserts the given products.
    ///
    /// Fails with `RepositoryError::AlreadyExists` if any id is already stored.
    async fn insert_all(&self, products: &[Product]) -> Result<()>;
}
