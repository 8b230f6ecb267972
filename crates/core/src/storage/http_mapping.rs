//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// The catalog only reads, so bad data can only come from the store itself
/// and `InvalidData` is a server error rather than a client one.
///
/// # Examples
///
/// ```
/// use catalog_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::ConnectionFailed("refused".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}
