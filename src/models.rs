//! Data model for scraped articles and their indexed representation.
//!
//! This module defines the two shapes an article takes during a run:
//! - [`ArticleRecord`]: the in-memory result of scraping, one per headline
//! - [`SearchDocument`]: the JSON body written to the search index
//!
//! A record is created during the discovery pass, enriched with content
//! during the article pass, and never mutated afterwards. The write step
//! derives a [`SearchDocument`] view that adds the indexing timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Placeholder stored in `content` when no article body could be fetched or
/// extracted. Records carrying it stay in the run's results but are skipped
/// by the indexer.
pub const MISSING_CONTENT: &str = "İçerik bulunamadı veya çekilemedi.";

/// One scraped article. The absolute URL is the natural key.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    /// Headline text, trimmed, non-empty.
    pub title: String,
    /// Absolute, canonicalized article URL.
    pub url: String,
    /// Summary and body paragraphs joined by blank lines, or the
    /// [`MISSING_CONTENT`] sentinel.
    pub content: String,
    /// Fixed label of the origin site.
    pub source: String,
    /// When the article was scraped (UTC), set once at creation.
    pub scraped_at: DateTime<Utc>,
}

impl ArticleRecord {
    /// Build a record, substituting the sentinel when extraction produced
    /// nothing.
    pub fn new(title: String, url: String, content: String, source: &str) -> Self {
        let content = if content.is_empty() {
            MISSING_CONTENT.to_string()
        } else {
            content
        };
        Self {
            title,
            url,
            content,
            source: source.to_string(),
            scraped_at: Utc::now(),
        }
    }

    /// Whether the record carries real article text (neither empty nor the
    /// sentinel). Only such records qualify for indexing.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty() && self.content != MISSING_CONTENT
    }
}

/// The document shape written to the search index.
///
/// Borrows from the record and stamps `indexed_at_utc` at write time. Field
/// names match the index mapping, so this serializes directly into the
/// upsert body.
#[derive(Debug, Serialize)]
pub struct SearchDocument<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub url: &'a str,
    pub source: &'a str,
    pub scraped_date_utc: &'a DateTime<Utc>,
    pub indexed_at_utc: DateTime<Utc>,
}

impl<'a> SearchDocument<'a> {
    pub fn from_record(record: &'a ArticleRecord) -> Self {
        Self {
            title: &record.title,
            content: &record.content,
            url: &record.url,
            source: &record.source,
            scraped_date_utc: &record.scraped_at,
            indexed_at_utc: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_content(content: &str) -> ArticleRecord {
        ArticleRecord::new(
            "Test Haberi".to_string(),
            "https://www.sozcu.com.tr/test-haberi".to_string(),
            content.to_string(),
            "sozcu.com.tr",
        )
    }

    #[test]
    fn test_empty_content_becomes_sentinel() {
        let record = record_with_content("");
        assert_eq!(record.content, MISSING_CONTENT);
        assert!(!record.has_content());
    }

    #[test]
    fn test_real_content_is_kept() {
        let record = record_with_content("Gündem özeti.\n\nAna metin.");
        assert_eq!(record.content, "Gündem özeti.\n\nAna metin.");
        assert!(record.has_content());
    }

    #[test]
    fn test_sentinel_content_does_not_qualify() {
        let record = record_with_content(MISSING_CONTENT);
        assert!(!record.has_content());
    }

    #[test]
    fn test_search_document_field_names_match_mapping() {
        let record = record_with_content("Ana metin.");
        let document = SearchDocument::from_record(&record);
        let value = serde_json::to_value(&document).unwrap();

        let object = value.as_object().unwrap();
        for field in [
            "title",
            "content",
            "url",
            "source",
            "scraped_date_utc",
            "indexed_at_utc",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object["title"], "Test Haberi");
        assert_eq!(object["source"], "sozcu.com.tr");
    }

    #[test]
    fn test_search_document_timestamps_parse_back() {
        let record = record_with_content("Ana metin.");
        let document = SearchDocument::from_record(&record);
        let value = serde_json::to_value(&document).unwrap();

        let scraped = value["scraped_date_utc"].as_str().unwrap();
        let indexed = value["indexed_at_utc"].as_str().unwrap();
        assert!(scraped.parse::<DateTime<Utc>>().is_ok(), "got {scraped}");
        assert!(indexed.parse::<DateTime<Utc>>().is_ok(), "got {indexed}");
    }

    #[test]
    fn test_indexed_at_is_stamped_at_write_time() {
        let record = record_with_content("Ana metin.");
        let document = SearchDocument::from_record(&record);
        assert!(document.indexed_at_utc >= record.scraped_at);
    }
}
