//! Description enricher
//!
//! Resolves a record's description from its detail page, consulting the
//! durable cache first. Cache keys are the detail-page URLs, so an entry
//! stays valid even when unrelated record fields change.

use crate::cache::DescriptionStore;
use crate::record::Description;
use crate::scrape::fetcher::fetch_document;
use crate::scrape::parser::parse_description_cell;
use crate::FilmRecord;
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Enriches film records with synopsis text from their detail pages
pub struct DescriptionEnricher<S> {
    store: S,
    prefix_chars: usize,
}

impl<S: DescriptionStore> DescriptionEnricher<S> {
    /// Creates a new enricher
    ///
    /// # Arguments
    ///
    /// * `store` - The durable description cache
    /// * `prefix_chars` - Length of the label prefix stripped from the cell text
    pub fn new(store: S, prefix_chars: usize) -> Self {
        Self {
            store,
            prefix_chars,
        }
    }

    /// Resolves the record's description in place
    ///
    /// A cache hit fills the record without any network traffic. A miss
    /// fetches the detail page, extracts and normalizes the synopsis cell,
    /// persists it, and fills the record. A record whose description is
    /// already resolved is left untouched.
    pub async fn enrich(
        &mut self,
        client: &Client,
        base: &Url,
        record: &mut FilmRecord,
    ) -> Result<(), ScrapeError> {
        let detail_path = match &record.description {
            Description::DetailPage(path) => path.clone(),
            Description::Text(_) => return Ok(()),
        };

        if let Some(text) = self.store.get(&detail_path)? {
            tracing::debug!("description cache hit for {}", detail_path);
            record.description = Description::Text(text);
            return Ok(());
        }

        tracing::info!("fetching description for film {}", record.film_name);
        let document = fetch_document(client, base, &detail_path).await?;
        let cell_text = {
            let html = Html::parse_document(&document);
            parse_description_cell(&html, &detail_path)?
        };

        let text = strip_label_prefix(&cell_text, self.prefix_chars);
        self.store.put(&detail_path, &text)?;
        record.description = Description::Text(text);

        Ok(())
    }
}

/// Normalizes a synopsis cell: trims surrounding whitespace, then drops the
/// fixed-length label prefix (e.g. `简介: `), counted in characters
pub fn strip_label_prefix(text: &str, prefix_chars: usize) -> String {
    text.trim().chars().skip(prefix_chars).collect()
}
