//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all products in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. This is
//! the default store for development and tests where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.insert_all(&generate_seed_products()).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
