//! Fixed seed catalog.
//!
//! Pure data with no side effects; the server writes it into an empty store
//! at startup and tests use it as a known catalog.

use super::{Price, Product};

/// Returns the three products written into an empty store at startup.
pub fn generate_seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Prod 1", Price::new(1, 20)),
        Product::new(2, "Prod 2", Price::new(2, 20)),
        Product::new(3, "Prod 3", Price::new(3, 30)),
    ]
}
