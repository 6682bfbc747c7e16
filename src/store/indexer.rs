//! Per-record indexing loop.

use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};

use crate::models::{ArticleRecord, SearchDocument};
use crate::store::elastic::SearchStore;
use crate::utils::truncate_for_log;

/// Stable document id for an article: the SHA-256 of its URL as a hex
/// string. Re-scraping the same URL maps to the same document.
pub fn document_id(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Outcome counts for one indexing pass.
#[derive(Debug, Default, PartialEq)]
pub struct IndexSummary {
    /// Documents written (created or overwritten).
    pub indexed: usize,
    /// Upserts the store rejected or that never reached it.
    pub failed: usize,
    /// Records without real content, never sent to the store.
    pub skipped: usize,
}

impl IndexSummary {
    pub fn any_indexed(&self) -> bool {
        self.indexed > 0
    }
}

/// Upsert every record that carries real content.
///
/// Records still holding the placeholder are counted as skipped without
/// touching the store. Failed writes are logged and counted; the loop always
/// runs to completion.
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub async fn index_records(store: &SearchStore, records: &[ArticleRecord]) -> IndexSummary {
    let mut summary = IndexSummary::default();

    for record in records {
        if !record.has_content() {
            debug!(
                title = %truncate_for_log(&record.title, 30),
                "Skipping article without content"
            );
            summary.skipped += 1;
            continue;
        }

        let id = document_id(&record.url);
        let document = SearchDocument::from_record(record);
        match store.upsert_document(&id, &document).await {
            Ok(()) => {
                debug!(
                    %id,
                    title = %truncate_for_log(&record.title, 30),
                    "Indexed article"
                );
                summary.indexed += 1;
            }
            Err(e) => {
                warn!(
                    error = %e,
                    title = %truncate_for_log(&record.title, 30),
                    "Failed to index article"
                );
                summary.failed += 1;
            }
        }
    }

    info!(
        indexed = summary.indexed,
        failed = summary.failed,
        skipped = summary.skipped,
        "Indexing pass complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrapeConfig;
    use crate::models::MISSING_CONTENT;

    fn unreachable_store() -> SearchStore {
        let config = ScrapeConfig {
            store_host: "http://127.0.0.1:9".to_string(),
            ..ScrapeConfig::default()
        };
        SearchStore::new(&config)
    }

    fn record(title: &str, url: &str, content: &str) -> ArticleRecord {
        ArticleRecord::new(
            title.to_string(),
            url.to_string(),
            content.to_string(),
            "sozcu.com.tr",
        )
    }

    #[test]
    fn test_document_id_is_stable() {
        let a = document_id("https://www.sozcu.com.tr/test-haberi");
        let b = document_id("https://www.sozcu.com.tr/test-haberi");
        assert_eq!(a, b);
        assert_eq!(
            a,
            "88d47ce2bd080fef551446c9ece271b21cb634f44bb1b986fc3d7360dc5ed8aa"
        );
    }

    #[test]
    fn test_document_id_is_a_hex_digest() {
        let id = document_id("https://www.sozcu.com.tr/");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(
            id,
            "861e6a6b81822e1ac692b5d49e8bb4de3b49e6f55f68d3d461d72c8c7d48ec6e"
        );
    }

    #[test]
    fn test_document_id_differs_by_url() {
        assert_ne!(
            document_id("https://www.sozcu.com.tr/a"),
            document_id("https://www.sozcu.com.tr/b")
        );
    }

    #[tokio::test]
    async fn test_records_without_content_never_reach_the_store() {
        // The store points at a closed port, so any store access would show
        // up as a failure instead of a skip.
        let store = unreachable_store();
        let records = vec![
            record("Başlık", "https://www.sozcu.com.tr/a-p1", ""),
            record("Diğer başlık", "https://www.sozcu.com.tr/b-p2", MISSING_CONTENT),
        ];

        let summary = index_records(&store, &records).await;
        assert_eq!(
            summary,
            IndexSummary {
                indexed: 0,
                failed: 0,
                skipped: 2,
            }
        );
        assert!(!summary.any_indexed());
    }

    #[tokio::test]
    async fn test_failed_writes_are_counted() {
        let store = unreachable_store();
        let records = vec![record(
            "Başlık",
            "https://www.sozcu.com.tr/a-p1",
            "Gerçek içerik.",
        )];

        let summary = index_records(&store, &records).await;
        assert_eq!(
            summary,
            IndexSummary {
                indexed: 0,
                failed: 1,
                skipped: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_mixed_records_are_partitioned() {
        let store = unreachable_store();
        let records = vec![
            record("Dolu", "https://www.sozcu.com.tr/dolu-p3", "İçerik var."),
            record("Boş", "https://www.sozcu.com.tr/bos-p4", ""),
        ];

        let summary = index_records(&store, &records).await;
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.indexed, 0);
    }
}
