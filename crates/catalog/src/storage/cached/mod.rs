//! Cached repository decorator.
//!
//! This module provides a decorator that wraps a [`ProductRepository`] with
//! the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: None; the catalog is read-only, so nothing is ever invalidated
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(InMemoryRepository::new());
//! let cache = Arc::new(MemoryCache::new(1_000)?);
//!
//! let cached_repo = CachedProductRepository::new(repo, cache, Duration::from_secs(1800));
//! ```
//!
//! [`ProductRepository`]: catalog_core::storage::ProductRepository

mod product;

pub use product::CachedProductRepository;
