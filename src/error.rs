//! Error types for the scrape pipeline.
//!
//! Every variant maps to one recovery point: transport failures become empty
//! content, structural mismatches degrade to empty results, a dead store
//! skips persistence for the run, and a failed write is counted and the loop
//! moves on. Nothing defined here is allowed to abort the process.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network or HTTP failure while fetching a page.
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A configured or discovered URL failed to parse.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An expected markup pattern was absent, or a structural marker did not
    /// compile into a selector.
    #[error("unexpected page structure: {0}")]
    StructuralMismatch(String),

    /// The search store could not be reached or refused the ping.
    #[error("search store unavailable at {host}: {reason}")]
    StoreConnection { host: String, reason: String },

    /// A single document upsert failed.
    #[error("failed to index document {id}: {reason}")]
    Write { id: String, reason: String },
}

impl ScrapeError {
    /// Transport failure while fetching `url`.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_mismatch_display() {
        let e = ScrapeError::StructuralMismatch("no article cards".to_string());
        assert_eq!(e.to_string(), "unexpected page structure: no article cards");
    }

    #[test]
    fn test_store_connection_display() {
        let e = ScrapeError::StoreConnection {
            host: "http://localhost:9200".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(e.to_string().contains("http://localhost:9200"));
        assert!(e.to_string().contains("connection refused"));
    }

    #[test]
    fn test_write_display() {
        let e = ScrapeError::Write {
            id: "abc123".to_string(),
            reason: "store returned 503".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to index document abc123: store returned 503"
        );
    }
}
