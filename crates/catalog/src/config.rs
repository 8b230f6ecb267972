use std::{env, time::Duration};

/// Default absolute expiration for the cached catalog (30 minutes).
const DEFAULT_CACHE_TTL_SECONDS: u64 = 30 * 60;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 1800)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 1,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "catalog.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 1800)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "catalog.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECONDS),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(1_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "catalog.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
