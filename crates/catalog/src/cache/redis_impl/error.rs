//! Redis error mapping to CacheError.

use catalog_core::cache::CacheError;

/// Maps Redis errors to CacheError.
///
/// Transport problems become `ConnectionFailed`. A reply of the wrong type
/// (e.g. `WRONGTYPE` because something else wrote a list under the catalog
/// key) becomes `Serialization`, so the caller can treat it like a corrupt
/// payload. Everything else is `OperationFailed`.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal()
        || err.is_timeout()
        || err.is_connection_dropped()
        || err.is_io_error()
    {
        CacheError::ConnectionFailed(err.to_string())
    } else if err.kind() == redis::ErrorKind::TypeError {
        CacheError::Serialization(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_maps_to_serialization() {
        let err = redis::RedisError::from((redis::ErrorKind::TypeError, "unexpected reply"));

        assert!(matches!(
            map_redis_error(err),
            CacheError::Serialization(_)
        ));
    }

    #[test]
    fn test_io_error_maps_to_connection_failed() {
        let err = redis::RedisError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));

        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_response_error_maps_to_operation_failed() {
        let err = redis::RedisError::from((redis::ErrorKind::ResponseError, "READONLY"));

        assert!(matches!(
            map_redis_error(err),
            CacheError::OperationFailed(_)
        ));
    }
}
