use async_trait::async_trait;
use mnemo_rs_memory::{Document, IndexError, RecordMetadata, VectorIndex};
use parking_lot::Mutex;
use std::sync::Arc;

/// In-memory vector index stand-in ranked by token overlap.
///
/// Like a real similarity search it always returns the nearest `k`
/// documents, even when nothing overlaps the query. Ties keep insertion
/// order, which makes rankings deterministic in tests.
#[derive(Default)]
pub struct KeywordIndex {
    pub documents: Arc<Mutex<Vec<Document>>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn score(query: &str, content: &str) -> usize {
        let content = content.to_lowercase();
        let tokens = content.split_whitespace().collect::<Vec<_>>();
        query
            .to_lowercase()
            .split_whitespace()
            .filter(|token| tokens.contains(token))
            .count()
    }
}

#[async_trait]
impl VectorIndex for KeywordIndex {
    async fn add_texts(
        &self,
        texts: Vec<String>,
        metadatas: Vec<RecordMetadata>,
    ) -> Result<(), IndexError> {
        let mut documents = self.documents.lock();
        for (page_content, metadata) in texts.into_iter().zip(metadatas) {
            documents.push(Document {
                page_content,
                metadata,
            });
        }
        Ok(())
    }

    async fn similarity_search(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<Document>, IndexError> {
        let mut ranked = self.documents.lock().clone();
        ranked.sort_by_key(|document| std::cmp::Reverse(Self::score(query, &document.page_content)));
        ranked.truncate(k);
        Ok(ranked)
    }
}

/// Fails both index operations with a fixed message.
pub struct FailingIndex {
    message: String,
}

impl FailingIndex {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl VectorIndex for FailingIndex {
    async fn add_texts(
        &self,
        _texts: Vec<String>,
        _metadatas: Vec<RecordMetadata>,
    ) -> Result<(), IndexError> {
        Err(IndexError::new(self.message.clone()))
    }

    async fn similarity_search(
        &self,
        _query: &str,
        _k: usize,
    ) -> Result<Vec<Document>, IndexError> {
        Err(IndexError::new(self.message.clone()))
    }
}

/// Records every add and query, serving preset search results.
#[derive(Default)]
pub struct RecordingIndex {
    pub added: Arc<Mutex<Vec<Document>>>,
    pub queries: Arc<Mutex<Vec<String>>>,
    results: Vec<Document>,
}

impl RecordingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: Vec<Document>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }
}

#[async_trait]
impl VectorIndex for RecordingIndex {
    async fn add_texts(
        &self,
        texts: Vec<String>,
        metadatas: Vec<RecordMetadata>,
    ) -> Result<(), IndexError> {
        let mut added = self.added.lock();
        for (page_content, metadata) in texts.into_iter().zip(metadatas) {
            added.push(Document {
                page_content,
                metadata,
            });
        }
        Ok(())
    }

    async fn similarity_search(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<Document>, IndexError> {
        self.queries.lock().push(query.to_string());
        Ok(self.results.iter().take(k).cloned().collect())
    }
}
