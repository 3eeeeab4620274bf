//! Configuration module for filmreg
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every parameter has a built-in default matching the production
//! site, so the scraper runs without any configuration file at all.
//!
//! # Example
//!
//! ```no_run
//! use filmreg::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ExtractionConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
