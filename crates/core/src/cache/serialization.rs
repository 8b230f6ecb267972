//! Pure functions for serializing/deserializing the catalog to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use crate::catalog::Product;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of products to JSON bytes.
///
/// # Arguments
/// * `products` - The products to serialize
///
/// # Returns
/// JSON-encoded bytes representing the products array
pub fn serialize_products(products: &[Product]) -> Result<Vec<u8>> {
    serde_json::to_vec(products).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of products.
///
/// # Arguments
/// * `bytes` - JSON-encoded bytes
///
/// # Returns
/// The deserialized vector of products
pub fn deserialize_products(bytes: &[u8]) -> Result<Vec<Product>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate_seed_products, Price};

    #[test]
    fn test_serialize_products_produces_json_array() {
        let products = vec![Product::new(1, "Prod 1", Price::from_cents(120))];

        let bytes = serialize_products(&products).expect("serialize should succeed");

        assert_eq!(bytes, br#"[{"id":1,"name":"Prod 1","price":1.2}]"#);
    }

    #[test]
    fn test_roundtrip_seed_catalog() {
        let products = generate_seed_products();

        let bytes = serialize_products(&products).expect("serialize should succeed");
        let deserialized = deserialize_products(&bytes).expect("deserialize should succeed");

        assert_eq!(products, deserialized);
    }

    #[test]
    fn test_serialize_empty_products_vec() {
        let products: Vec<Product> = vec![];

        let bytes = serialize_products(&products).expect("serialize should succeed");
        let deserialized = deserialize_products(&bytes).expect("deserialize should succeed");

        assert!(deserialized.is_empty());
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let result = deserialize_products(b"not valid json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        // A single object is not a catalog.
        let result = deserialize_products(br#"{"id":1,"name":"Prod 1","price":1.2}"#);

        assert!(result.is_err());
    }
}
