//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use catalog_core::catalog::{Price, Product};
use rusqlite::Row;

/// Convert a SQLite row to a Product.
///
/// Expected columns: id, name, price_cents
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let id: i32 = row.get(0)?;
    let name: String = row.get(1)?;
    let price_cents: i64 = row.get(2)?;

    Ok(Product::new(id, name, Price::from_cents(price_cents)))
}

/// Convert a stored row count to `usize`.
pub fn count_to_usize(count: i64) -> rusqlite::Result<usize> {
    usize::try_from(count).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, count))
}
