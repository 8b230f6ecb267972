//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `catalog_core::storage`, plus the caching decorator that wraps
//! them. The store is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): Products held in a `BTreeMap`, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p catalog --no-default-features --features sqlite,memory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p catalog --features sqlite"
);

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
