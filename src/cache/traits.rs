//! Cache trait and error types

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to create cache directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Durable key-value store for resolved film descriptions
///
/// Keys are detail-page URLs. Entries are never invalidated or expired; a
/// written value is treated as authoritative, and `put` for an existing key
/// is a no-op.
pub trait DescriptionStore {
    /// Returns the cached description for a detail-page URL, if present
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a description for a detail-page URL
    ///
    /// First write wins: if the key already has a value, it is kept.
    fn put(&mut self, key: &str, description: &str) -> CacheResult<()>;
}
