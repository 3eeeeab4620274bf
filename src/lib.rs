//! Filmreg: a scraper for the public film registration directory
//!
//! This crate crawls the paginated film registration announcement index,
//! extracts one record per listing-table row, enriches each record with the
//! synopsis text from its detail page (backed by a durable cache), and
//! exports the aggregate as an xlsx workbook.

pub mod cache;
pub mod config;
pub mod output;
pub mod record;
pub mod scrape;

use thiserror::Error;

/// Main error type for filmreg operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Page count marker not found in index document")]
    PageCountMissing,

    #[error("Missing element `{selector}` in {context}")]
    MissingElement { context: String, selector: String },

    #[error("Malformed script fragment in {context}: expected a quoted value")]
    MalformedScript { context: String },

    #[error("Malformed listing path `{path}`: cannot derive release year")]
    MalformedPath { path: String },

    #[error("Record `{film_name}` still holds an unresolved description reference")]
    UnresolvedDescription { film_name: String },

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for filmreg operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::{Description, FilmRecord};
