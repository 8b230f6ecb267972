mod price;
mod seed_data;
mod types;

pub use price::Price;
pub use seed_data::generate_seed_products;
pub use types::Product;
