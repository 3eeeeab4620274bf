//! HTTP fetcher
//!
//! One client is built at startup and reused for the whole crawl. All paths
//! discovered on the site are relative and get joined against the configured
//! base address before fetching.

use crate::config::SiteConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for the entire crawl
///
/// # Arguments
///
/// * `config` - The target site configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one document by relative path
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - Base address of the directory site
/// * `path` - Relative path (e.g. `index_2.html` or `./202401/detail.html`)
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - Join, transport, or status error
pub async fn fetch_document(client: &Client, base: &Url, path: &str) -> Result<String, ScrapeError> {
    let url = base.join(path)?;
    tracing::debug!("fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = SiteConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_document_propagates_status_errors() {
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = build_http_client(&SiteConfig::default()).unwrap();
        let base = Url::parse(&format!("{}/", mock_server.uri())).unwrap();

        let result = fetch_document(&client, &base, "index.html").await;
        assert!(matches!(result, Err(ScrapeError::Http { .. })));
    }

    #[tokio::test]
    async fn test_fetch_document_joins_relative_paths() {
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/films/202401/detail.html"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("body"))
            .mount(&mock_server)
            .await;

        let client = build_http_client(&SiteConfig::default()).unwrap();
        let base = Url::parse(&format!("{}/films/", mock_server.uri())).unwrap();

        let body = fetch_document(&client, &base, "./202401/detail.html")
            .await
            .unwrap();
        assert_eq!(body, "body");
    }
}
