use serde::{Deserialize, Serialize};

use super::Price;

/// A product in the catalog.
///
/// Products are read-only snapshots; the catalog exposes no write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Price,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: i32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
