//! Functional core for the catalog service.
//!
//! Holds the domain types, the cache and storage traits, and the pure
//! helpers (keys, serialization, error mapping) shared by the server crate.

pub mod cache;
pub mod catalog;
pub mod storage;
