//! Semantic store adapter over an external vector index.

use crate::error::{IndexError, MemoryError};
use crate::model::{Document, MemoryRecord, RecordMetadata};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// External vector index contract.
///
/// Implementations own embedding computation and storage; the memory core
/// only relies on this surface. Results of `similarity_search` are ranked
/// by the index's own similarity metric, ties broken by its internal order.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Persist indexed texts with their metadata.
    async fn add_texts(
        &self,
        texts: Vec<String>,
        metadatas: Vec<RecordMetadata>,
    ) -> Result<(), IndexError>;

    /// Return at most `k` documents ranked by similarity to `query`.
    async fn similarity_search(&self, query: &str, k: usize)
    -> Result<Vec<Document>, IndexError>;
}

/// Narrow adapter isolating the coordinator from the index implementation.
///
/// Holds a shared handle; the index lifecycle is owned by the caller.
#[derive(Clone)]
pub struct SemanticStore {
    index: Arc<dyn VectorIndex>,
}

impl SemanticStore {
    /// Wrap an external vector index.
    pub fn new(index: Arc<dyn VectorIndex>) -> Self {
        Self { index }
    }

    /// Durably write one record to the index.
    ///
    /// Failures propagate to the caller; nothing is retried or rolled back.
    pub async fn add(&self, text: String, metadata: RecordMetadata) -> Result<(), MemoryError> {
        debug!(
            "writing memory record (conversation_id={}, content_len={})",
            metadata.conversation_id,
            text.len()
        );
        self.index
            .add_texts(vec![text], vec![metadata])
            .await
            .map_err(MemoryError::StoreWrite)
    }

    /// Return at most `k` records ranked by similarity to `query`.
    ///
    /// `k == 0` short-circuits to an empty result without touching the
    /// index, whose behavior for a zero fan-out is unspecified.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<MemoryRecord>, MemoryError> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let documents = self
            .index
            .similarity_search(query, k)
            .await
            .map_err(MemoryError::StoreQuery)?;
        debug!(
            "similarity search returned documents (k={}, returned={})",
            k,
            documents.len()
        );
        Ok(documents.into_iter().map(MemoryRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{SemanticStore, VectorIndex};
    use crate::error::{IndexError, MemoryError};
    use crate::model::{Document, RecordMetadata};
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingIndex {
        searches: Mutex<usize>,
    }

    #[async_trait]
    impl VectorIndex for CountingIndex {
        async fn add_texts(
            &self,
            _texts: Vec<String>,
            _metadatas: Vec<RecordMetadata>,
        ) -> Result<(), IndexError> {
            Ok(())
        }

        async fn similarity_search(
            &self,
            _query: &str,
            k: usize,
        ) -> Result<Vec<Document>, IndexError> {
            *self.searches.lock() += 1;
            let metadata = RecordMetadata {
                timestamp: Utc::now(),
                conversation_id: 1,
            };
            Ok(vec![
                Document {
                    page_content: "Human: hi\nAi: hello".to_string(),
                    metadata,
                };
                k.min(1)
            ])
        }
    }

    struct BrokenIndex;

    #[async_trait]
    impl VectorIndex for BrokenIndex {
        async fn add_texts(
            &self,
            _texts: Vec<String>,
            _metadatas: Vec<RecordMetadata>,
        ) -> Result<(), IndexError> {
            Err(IndexError::new("disk full"))
        }

        async fn similarity_search(
            &self,
            _query: &str,
            _k: usize,
        ) -> Result<Vec<Document>, IndexError> {
            Err(IndexError::new("index offline"))
        }
    }

    #[tokio::test]
    async fn search_maps_documents_to_records() {
        let store = SemanticStore::new(Arc::new(CountingIndex::default()));
        let records = store.search("hi", 3).await.expect("search");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "Human: hi\nAi: hello");
    }

    #[tokio::test]
    async fn zero_fan_out_skips_the_index() {
        let index = Arc::new(CountingIndex::default());
        let store = SemanticStore::new(index.clone());
        let records = store.search("hi", 0).await.expect("search");
        assert_eq!(records, Vec::new());
        assert_eq!(*index.searches.lock(), 0);
    }

    #[tokio::test]
    async fn failures_surface_as_store_errors() {
        let store = SemanticStore::new(Arc::new(BrokenIndex));
        let metadata = RecordMetadata {
            timestamp: Utc::now(),
            conversation_id: 1,
        };
        let err = store
            .add("text".to_string(), metadata)
            .await
            .expect_err("write");
        assert_eq!(err, MemoryError::StoreWrite(IndexError::new("disk full")));

        let err = store.search("hi", 2).await.expect_err("query");
        assert_eq!(err, MemoryError::StoreQuery(IndexError::new("index offline")));
    }
}
