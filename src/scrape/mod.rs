//! Scrape module for crawling the film registration directory
//!
//! This module contains the core pipeline:
//! - HTTP fetching against the fixed base address
//! - Listing-table and index-page parsing
//! - Concurrent sub-page discovery
//! - Cache-backed description enrichment
//! - Overall crawl coordination

mod coordinator;
mod discoverer;
mod enricher;
mod fetcher;
mod parser;

pub use coordinator::{run_scrape, Coordinator};
pub use discoverer::discover_listing_pages;
pub use enricher::{strip_label_prefix, DescriptionEnricher};
pub use fetcher::{build_http_client, fetch_document};
pub use parser::{
    parse_description_cell, parse_listing_links, parse_listing_rows, parse_page_count,
    release_year_from_path,
};
