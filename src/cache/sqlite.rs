//! SQLite-backed description cache

use crate::cache::traits::{CacheError, CacheResult, DescriptionStore};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Database filename inside the cache directory
const CACHE_FILE: &str = "descriptions.db";

/// SQL schema for the description cache
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS descriptions (
    detail_path TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

/// SQLite cache backend
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens (or creates) the cache under the given directory
    ///
    /// # Arguments
    ///
    /// * `dir` - Cache directory; created if it does not exist
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteCache)` - Successfully opened/created cache
    /// * `Err(CacheError)` - Failed to create the directory or open the database
    pub fn open(dir: &Path) -> CacheResult<Self> {
        std::fs::create_dir_all(dir).map_err(|source| CacheError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;

        let conn = Connection::open(dir.join(CACHE_FILE))?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;

        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory cache (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }
}

impl DescriptionStore for SqliteCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let description = self
            .conn
            .query_row(
                "SELECT description FROM descriptions WHERE detail_path = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(description)
    }

    fn put(&mut self, key: &str, description: &str) -> CacheResult<()> {
        let now = Utc::now().to_rfc3339();
        // First write wins: an existing entry stays authoritative.
        self.conn.execute(
            "INSERT OR IGNORE INTO descriptions (detail_path, description, created_at)
             VALUES (?1, ?2, ?3)",
            params![key, description, now],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_on_empty_cache() {
        let cache = SqliteCache::open_in_memory().unwrap();
        assert_eq!(cache.get("./202401/detail.html").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let mut cache = SqliteCache::open_in_memory().unwrap();
        cache.put("./202401/detail.html", "A story about...").unwrap();

        let cached = cache.get("./202401/detail.html").unwrap();
        assert_eq!(cached.as_deref(), Some("A story about..."));
    }

    #[test]
    fn test_first_write_wins() {
        let mut cache = SqliteCache::open_in_memory().unwrap();
        cache.put("./202401/detail.html", "original text").unwrap();
        cache.put("./202401/detail.html", "different text").unwrap();

        let cached = cache.get("./202401/detail.html").unwrap();
        assert_eq!(cached.as_deref(), Some("original text"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = SqliteCache::open_in_memory().unwrap();
        cache.put("./202401/a.html", "first").unwrap();
        cache.put("./202401/b.html", "second").unwrap();

        assert_eq!(cache.get("./202401/a.html").unwrap().as_deref(), Some("first"));
        assert_eq!(cache.get("./202401/b.html").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut cache = SqliteCache::open(dir.path()).unwrap();
            cache.put("./202401/detail.html", "A story about...").unwrap();
        }

        let cache = SqliteCache::open(dir.path()).unwrap();
        let cached = cache.get("./202401/detail.html").unwrap();
        assert_eq!(cached.as_deref(), Some("A story about..."));
    }
}
