//! Startup seeding of the product store.

use catalog_core::catalog::generate_seed_products;
use catalog_core::storage::{ProductStore, Result};

/// Writes the seed catalog into `store` if it holds no products.
///
/// Returns the number of products inserted, 0 when the store was already
/// populated. Runs once at startup, never on the request path.
pub async fn seed_if_empty<S>(store: &S) -> Result<usize>
where
    S: ProductStore + ?Sized,
{
    if store.count().await? > 0 {
        tracing::debug!("Product store already populated, skipping seed");
        return Ok(0);
    }

    let products = generate_seed_products();
    store.insert_all(&products).await?;

    tracing::info!(count = products.len(), "Seeded product store");
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use catalog_core::catalog::{Price, Product};
    use catalog_core::storage::{ProductRepository, RepositoryError};

    #[derive(Default)]
    struct TestStore {
        products: Mutex<Vec<Product>>,
        fail_count: bool,
    }

    #[async_trait]
    impl ProductRepository for TestStore {
        async fn get_all(&self) -> Result<Vec<Product>> {
            Ok(self.products.lock().unwrap().clone())
        }
    }

    #[async_trait]
    impl ProductStore for TestStore {
        async fn count(&self) -> Result<usize> {
            if self.fail_count {
                return Err(RepositoryError::ConnectionFailed("refused".to_string()));
            }
            Ok(self.products.lock().unwrap().len())
        }

        async fn insert_all(&self, products: &[Product]) -> Result<()> {
            self.products.lock().unwrap().extend_from_slice(products);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let store = TestStore::default();

        let inserted = seed_if_empty(&store).await.unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(store.get_all().await.unwrap(), generate_seed_products());
    }

    #[tokio::test]
    async fn test_skips_populated_store() {
        let store = TestStore::default();
        let existing = Product::new(42, "Existing", Price::from_cents(100));
        store.products.lock().unwrap().push(existing.clone());

        let inserted = seed_if_empty(&store).await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(store.get_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn test_seeding_twice_is_a_noop() {
        let store = TestStore::default();

        seed_if_empty(&store).await.unwrap();
        let inserted = seed_if_empty(&store).await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let store = TestStore {
            fail_count: true,
            ..Default::default()
        };

        let result = seed_if_empty(&store).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
