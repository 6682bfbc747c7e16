//! Runtime configuration for a pipeline run.
//!
//! The defaults are the production constants; nothing is read from the
//! command line or the environment. Tests construct modified copies to point
//! components at fixture hosts.

use std::time::Duration;

/// Configuration handed to each component at construction.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Homepage scanned for article cards; also the base URL relative links
    /// are resolved against.
    pub homepage_url: String,
    /// Browser-like user agent sent with every page request.
    pub user_agent: String,
    /// Per-request timeout for page fetches.
    pub request_timeout: Duration,
    /// Cap on successful article-content fetches per run; `None` means
    /// unlimited. Once reached, remaining articles keep sentinel content.
    pub content_fetch_limit: Option<usize>,
    /// Base URL of the search store.
    pub store_host: String,
    /// Index the documents are written to.
    pub index_name: String,
    /// Per-request timeout for store calls.
    pub store_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            homepage_url: "https://www.sozcu.com.tr/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            request_timeout: Duration::from_secs(15),
            content_fetch_limit: None,
            store_host: "http://localhost:9200".to_string(),
            index_name: "sozcu_articles_simple".to_string(),
            store_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ScrapeConfig::default();
        assert_eq!(config.homepage_url, "https://www.sozcu.com.tr/");
        assert_eq!(config.store_host, "http://localhost:9200");
        assert_eq!(config.index_name, "sozcu_articles_simple");
    }

    #[test]
    fn test_default_timeouts() {
        let config = ScrapeConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.store_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_content_fetching_is_unlimited_by_default() {
        assert_eq!(ScrapeConfig::default().content_fetch_limit, None);
    }

    #[test]
    fn test_default_user_agent_looks_like_a_browser() {
        let config = ScrapeConfig::default();
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.user_agent.contains("Chrome"));
    }
}
