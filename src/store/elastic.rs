//! REST client for the Elasticsearch index.
//!
//! Talks plain HTTP to the server: `HEAD /{index}` to probe for the index,
//! `PUT /{index}` to create it with its mapping, and `PUT /{index}/_doc/{id}`
//! to upsert documents. Writing the same id twice overwrites the document,
//! which is what makes re-scraping idempotent.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::models::SearchDocument;

/// Client bound to one index on one server.
pub struct SearchStore {
    client: Client,
    host: String,
    index: String,
}

impl SearchStore {
    /// Build a client from the run configuration without touching the
    /// network.
    pub fn new(config: &ScrapeConfig) -> Self {
        let client = Client::builder()
            .timeout(config.store_timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            host: config.store_host.trim_end_matches('/').to_string(),
            index: config.index_name.clone(),
        }
    }

    /// Build a client and verify the server answers at its root endpoint.
    pub async fn connect(config: &ScrapeConfig) -> Result<Self> {
        let store = Self::new(config);
        let response = store
            .client
            .get(format!("{}/", store.host))
            .send()
            .await
            .map_err(|e| store.connection_error(e.to_string()))?;
        if !response.status().is_success() {
            return Err(store.connection_error(format!("ping returned {}", response.status())));
        }
        info!(host = %store.host, index = %store.index, "Connected to search store");
        Ok(store)
    }

    /// Create the index with its mapping when missing; leave it untouched
    /// when present.
    pub async fn ensure_index(&self) -> Result<()> {
        if self.index_exists().await? {
            debug!(index = %self.index, "Search index already exists");
            Ok(())
        } else {
            self.create_index().await
        }
    }

    /// Whether the index already exists on the server.
    pub async fn index_exists(&self) -> Result<bool> {
        let response = self
            .client
            .head(self.index_url())
            .send()
            .await
            .map_err(|e| self.connection_error(e.to_string()))?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(self.connection_error(format!("index check returned {status}"))),
        }
    }

    /// Create the index with the article mapping.
    pub async fn create_index(&self) -> Result<()> {
        let response = self
            .client
            .put(self.index_url())
            .json(&article_index_schema())
            .send()
            .await
            .map_err(|e| self.connection_error(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            info!(index = %self.index, "Created search index");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(self.connection_error(format!("index creation returned {status}: {body}")))
        }
    }

    /// Insert or overwrite one document under the given id.
    pub async fn upsert_document(&self, id: &str, document: &SearchDocument<'_>) -> Result<()> {
        let url = format!("{}/_doc/{}", self.index_url(), id);
        let response = self
            .client
            .put(&url)
            .json(document)
            .send()
            .await
            .map_err(|e| ScrapeError::Write {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        let status = response.status();
        if status.is_success() {
            debug!(id, "Upserted document");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ScrapeError::Write {
                id: id.to_string(),
                reason: format!("store returned {status}: {body}"),
            })
        }
    }

    fn index_url(&self) -> String {
        format!("{}/{}", self.host, self.index)
    }

    fn connection_error(&self, reason: impl Into<String>) -> ScrapeError {
        ScrapeError::StoreConnection {
            host: self.host.clone(),
            reason: reason.into(),
        }
    }
}

/// Mapping for the article index: title and content analyzed as text, the
/// URL and source kept verbatim for exact lookups, timestamps as dates.
fn article_index_schema() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "properties": {
                "title": { "type": "text" },
                "content": { "type": "text" },
                "url": { "type": "keyword" },
                "source": { "type": "keyword" },
                "scraped_date_utc": { "type": "date" },
                "indexed_at_utc": { "type": "date" }
            }
        }
    })
}
