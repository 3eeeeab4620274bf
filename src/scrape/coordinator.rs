//! Crawl coordinator - overall scrape orchestration
//!
//! The coordinator drives the two phases of the crawl: the concurrent
//! sub-page discovery, then a strictly sequential pass over every listing
//! page (extract rows, enrich each row's description). Keeping the second
//! phase sequential bounds outstanding connections and keeps the cache as
//! the only shared resource, touched from one task at a time.

use crate::cache::SqliteCache;
use crate::config::Config;
use crate::record::FilmRecord;
use crate::scrape::discoverer::discover_listing_pages;
use crate::scrape::enricher::DescriptionEnricher;
use crate::scrape::fetcher::{build_http_client, fetch_document};
use crate::scrape::parser::{parse_listing_rows, release_year_from_path};
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Main crawl coordinator structure
pub struct Coordinator {
    client: Client,
    base: Url,
    enricher: DescriptionEnricher<SqliteCache>,
    cancel: Arc<AtomicBool>,
}

impl Coordinator {
    /// Creates a new coordinator
    ///
    /// Opens the description cache for the lifetime of the crawl; the cache
    /// is handed to the enricher rather than living in global state.
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    /// * `cancel` - Flag checked between listing pages; setting it stops the
    ///   crawl after the current page
    pub fn new(config: &Config, cancel: Arc<AtomicBool>) -> Result<Self, ScrapeError> {
        let base = Url::parse(&config.site.base_url)?;
        let client = build_http_client(&config.site)?;

        let cache = SqliteCache::open(Path::new(&config.output.cache_dir))?;
        let enricher = DescriptionEnricher::new(cache, config.extraction.description_prefix_chars);

        Ok(Self {
            client,
            base,
            enricher,
            cancel,
        })
    }

    /// Runs the crawl and returns the aggregated records
    ///
    /// Discovery failures are fatal. Once the page loop has started, a
    /// page-level error or a cancellation request stops further iteration
    /// but still returns every record accumulated so far, so partial results
    /// reach the export sink.
    pub async fn run(&mut self) -> Result<Vec<FilmRecord>, ScrapeError> {
        let pages = discover_listing_pages(&self.client, &self.base).await?;
        tracing::info!("discovered {} listing pages", pages.len());

        let mut films = Vec::new();

        for page in &pages {
            if self.cancel.load(Ordering::Relaxed) {
                tracing::info!(
                    "stop requested, exporting the {} records scraped so far",
                    films.len()
                );
                break;
            }

            match self.process_page(page).await {
                Ok(mut page_films) => films.append(&mut page_films),
                Err(e) => {
                    tracing::error!("aborting crawl at {}: {}", page, e);
                    break;
                }
            }
        }

        Ok(films)
    }

    /// Extracts and enriches every row of one listing page, in row order
    async fn process_page(&mut self, page_path: &str) -> Result<Vec<FilmRecord>, ScrapeError> {
        tracing::info!("start scraping for {}", page_path);

        let release_year = release_year_from_path(page_path)?;
        let document = fetch_document(&self.client, &self.base, page_path).await?;

        let mut films = {
            let html = Html::parse_document(&document);
            parse_listing_rows(&html, &release_year, page_path)?
        };

        for film in &mut films {
            self.enricher
                .enrich(&self.client, &self.base, film)
                .await?;
        }

        Ok(films)
    }
}

/// Runs the full scrape with the given configuration
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `cancel` - Cooperative cancellation flag (see [`Coordinator::new`])
///
/// # Returns
///
/// * `Ok(Vec<FilmRecord>)` - Aggregated records, possibly partial on
///   mid-crawl failure or cancellation
/// * `Err(ScrapeError)` - Setup or discovery failed
pub async fn run_scrape(
    config: &Config,
    cancel: Arc<AtomicBool>,
) -> Result<Vec<FilmRecord>, ScrapeError> {
    let mut coordinator = Coordinator::new(config, cancel)?;
    coordinator.run().await
}
