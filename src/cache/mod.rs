//! Durable description cache
//!
//! Synopsis texts are expensive to re-fetch, so resolved descriptions are
//! persisted on disk keyed by the detail-page URL. The cache survives
//! process restarts and is append-only: once a key has a value, later writes
//! for the same key are ignored.

mod sqlite;
mod traits;

pub use sqlite::SqliteCache;
pub use traits::{CacheError, CacheResult, DescriptionStore};
