//! SQLite repository implementation.
//!
//! Implements the repository traits from `catalog_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use catalog_core::catalog::Product;
use catalog_core::storage::{ProductRepository, ProductStore, RepositoryError, Result};

use super::conversions::{count_to_usize, row_to_product};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based product store.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn get_all(&self) -> Result<Vec<Product>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PRODUCTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_product).map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }
}

#[async_trait]
impl ProductStore for SqliteRepository {
    async fn count(&self) -> Result<usize> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_PRODUCTS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                count_to_usize(count).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }

    async fn insert_all(&self, products: &[Product]) -> Result<()> {
        let products = products.to_vec();

        self.conn
            .call(move |conn| {
                // One transaction so a conflicting id leaves the table untouched
                let tx = conn.transaction().map_err(wrap_err)?;
                {
                    let mut stmt = tx.prepare(schema::INSERT_PRODUCT).map_err(wrap_err)?;
                    for product in &products {
                        stmt.execute(rusqlite::params![
                            product.id,
                            product.name,
                            product.price.cents()
                        ])
                        .map_err(wrap_err)?;
                    }
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }
}
