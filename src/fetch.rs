//! HTTP client for downloading pages with a browser-like identity.

use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

/// Shared HTTP client used for every page download in a run.
///
/// Sends the configured `User-Agent` header on each request and enforces the
/// per-request timeout from [`ScrapeConfig`].
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build the client from the run configuration.
    pub fn new(config: &ScrapeConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    /// Download a page and return its decoded body.
    ///
    /// Non-success status codes count as transport failures, so callers only
    /// ever see a body for pages that actually resolved.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?
            .error_for_status()
            .map_err(|e| ScrapeError::transport(url, e))?;
        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?;
        debug!(bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_default_config() {
        let config = ScrapeConfig::default();
        let _ = PageFetcher::new(&config);
    }

    #[tokio::test]
    async fn test_fetch_text_reports_transport_error() {
        // Port 9 on loopback is not listening; the connect fails immediately.
        let fetcher = PageFetcher::new(&ScrapeConfig::default());
        let result = fetcher.fetch_text("http://127.0.0.1:9/haber").await;
        match result {
            Err(ScrapeError::Transport { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:9/haber");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
