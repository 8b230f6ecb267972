mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::PRODUCTS_ALL_KEY;
pub use serialization::{deserialize_products, serialize_products, SerializationError};
pub use traits::Cache;
