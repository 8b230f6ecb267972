//! Redis cache backend implementation.
//!
//! Provides a distributed cache using Redis for multi-instance deployments.
//! Every instance reads and writes the same catalog key.

mod cache;
mod error;

pub use cache::RedisCache;
