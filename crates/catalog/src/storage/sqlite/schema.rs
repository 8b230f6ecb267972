//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// Prices are stored as integer cents to keep them exact.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    price_cents INTEGER NOT NULL
);
"#;

/// Select every product, ordered by id.
pub const SELECT_ALL_PRODUCTS: &str = "SELECT id, name, price_cents FROM products ORDER BY id";

/// Count stored products.
pub const COUNT_PRODUCTS: &str = "SELECT COUNT(*) FROM products";

/// Insert a single product.
pub const INSERT_PRODUCT: &str = "INSERT INTO products (id, name, price_cents) VALUES (?1, ?2, ?3)";
