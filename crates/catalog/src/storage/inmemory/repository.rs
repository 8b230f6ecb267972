//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::catalog::Product;
use catalog_core::storage::{ProductRepository, ProductStore, RepositoryError, Result};

/// In-memory product store.
///
/// Products are keyed by id, so `get_all` returns them in id order.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }
}

#[async_trait]
impl ProductStore for InMemoryRepository {
    async fn count(&self) -> Result<usize> {
        Ok(self.products.read().await.len())
    }

    async fn insert_all(&self, new_products: &[Product]) -> Result<()> {
        let mut products = self.products.write().await;

        // Validate the whole batch first so a conflict leaves the store untouched
        if let Some(existing) = new_products.iter().find(|p| products.contains_key(&p.id)) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Product",
                id: existing.id.to_string(),
            });
        }

        for product in new_products {
            products.insert(product.id, product.clone());
        }
        Ok(())
    }
}
