//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `catalog_core::storage`.

use catalog_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_PRIMARYKEY` / `SQLITE_CONSTRAINT_UNIQUE` → `RepositoryError::AlreadyExists`
/// - Open failures → `RepositoryError::ConnectionFailed`
/// - Column type mismatches → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepositoryError::AlreadyExists {
                entity_type,
                id: "unknown".to_string(), // ID not available from error
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::InvalidColumnType(..) | rusqlite::Error::IntegralValueOutOfRange(..) => {
            RepositoryError::InvalidData(format!("{entity_type} row is malformed: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps to a connection or generic query error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_returned_no_rows_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        assert!(matches!(
            map_tokio_rusqlite_error(err, "Product"),
            RepositoryError::QueryFailed(_)
        ));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let err = tokio_rusqlite::Error::ConnectionClosed;

        assert!(matches!(
            map_tokio_rusqlite_error(err, "Product"),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_out_of_range_maps_to_invalid_data() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::IntegralValueOutOfRange(0, -1));

        assert!(matches!(
            map_tokio_rusqlite_error(err, "Product"),
            RepositoryError::InvalidData(_)
        ));
    }
}
