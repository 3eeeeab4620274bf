//! Sub-page discoverer
//!
//! The top-level index page links a handful of listing pages directly and
//! publishes the total number of paginated index pages as an inline script
//! assignment. Every paginated index page is fetched concurrently; the
//! combined listing-page sequence stays in page-number order.

use crate::scrape::fetcher::fetch_document;
use crate::scrape::parser::{parse_listing_links, parse_page_count};
use crate::ScrapeError;
use futures::future::try_join_all;
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Top-level index page path
const INDEX_PATH: &str = "index.html";

/// Path of the n-th paginated index page
fn sub_index_path(page_number: u32) -> String {
    format!("index_{}.html", page_number)
}

/// Discovers all listing pages referenced from the index
///
/// Fetches the top-level index, collects its listing links, then fetches
/// `index_1.html` up to (but excluding) the published page count, all
/// dispatched concurrently with a join barrier. The result preserves
/// page-number order; within a page, links stay in document order.
///
/// # Errors
///
/// A missing page-count marker or any fetch/parse failure is fatal to the
/// whole discovery phase.
pub async fn discover_listing_pages(client: &Client, base: &Url) -> Result<Vec<String>, ScrapeError> {
    let document = fetch_document(client, base, INDEX_PATH).await?;

    let (mut pages, page_count) = {
        let html = Html::parse_document(&document);
        (parse_listing_links(&html)?, parse_page_count(&document)?)
    };

    tracing::info!(
        "index links {} listing pages directly, {} paginated index pages total",
        pages.len(),
        page_count
    );

    // try_join_all keeps the results in dispatch order, so the flattened
    // sequence is ordered by page number even though completions race.
    let fetches = (1..page_count).map(|page_number| fetch_sub_index(client, base, page_number));
    for links in try_join_all(fetches).await? {
        pages.extend(links);
    }

    Ok(pages)
}

/// Fetches one paginated index page and extracts its listing links
async fn fetch_sub_index(
    client: &Client,
    base: &Url,
    page_number: u32,
) -> Result<Vec<String>, ScrapeError> {
    let document = fetch_document(client, base, &sub_index_path(page_number)).await?;
    let html = Html::parse_document(&document);
    parse_listing_links(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_index_path() {
        assert_eq!(sub_index_path(1), "index_1.html");
        assert_eq!(sub_index_path(12), "index_12.html");
    }
}
