//! Memory coordinator: single point of truth for both memory tiers.

use crate::error::MemoryError;
use crate::model::RecordMetadata;
use crate::store::SemanticStore;
use crate::transcript::Transcript;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Owns the short-term transcript and the long-term semantic store.
///
/// One coordinator per logical session; all mutation is sequential through
/// `&mut self`. Every remembered exchange mutates both tiers together.
pub struct MemoryCoordinator {
    transcript: Transcript,
    store: SemanticStore,
    turn_counter: u64,
    fan_out: usize,
    last_interaction: Option<DateTime<Utc>>,
}

impl MemoryCoordinator {
    /// Create a coordinator with an unbounded transcript.
    pub fn new(store: SemanticStore, fan_out: usize) -> Self {
        Self {
            transcript: Transcript::new(),
            store,
            turn_counter: 0,
            fan_out,
            last_interaction: None,
        }
    }

    /// Cap the retained recent turns; unbounded by default.
    pub fn with_max_recent_turns(mut self, max_turns: usize) -> Self {
        self.transcript = Transcript::with_max_turns(max_turns);
        self
    }

    /// Record one exchange in both tiers.
    ///
    /// The transcript is updated before the durable write, so a store
    /// failure leaves the short-term turn in place; the failure is
    /// surfaced, not rolled back.
    pub async fn remember(
        &mut self,
        user_input: &str,
        assistant_output: &str,
    ) -> Result<(), MemoryError> {
        self.turn_counter += 1;
        let now = Utc::now();
        self.last_interaction = Some(now);
        let metadata = RecordMetadata {
            timestamp: now,
            conversation_id: self.turn_counter,
        };

        self.transcript.append(user_input, assistant_output);

        let memory_text = format!("Human: {user_input}\nAi: {assistant_output}");
        self.store.add(memory_text, metadata).await?;
        info!(
            "remembered exchange (conversation_id={}, transcript_turns={})",
            self.turn_counter,
            self.transcript.len()
        );
        Ok(())
    }

    /// Retrieve the most relevant long-term memories for `query`.
    ///
    /// Each record renders as a timestamped line; entries are separated by
    /// a blank line. Empty string when nothing matches. The transcript and
    /// the exchange counter are untouched.
    pub async fn recall(&self, query: &str) -> Result<String, MemoryError> {
        let records = self.store.search(query, self.fan_out).await?;
        debug!(
            "recalled memories (fan_out={}, returned={})",
            self.fan_out,
            records.len()
        );
        let formatted = records
            .iter()
            .map(|record| {
                format!(
                    "[{}] {}",
                    record.metadata.timestamp.to_rfc3339(),
                    record.text
                )
            })
            .collect::<Vec<_>>();
        Ok(formatted.join("\n\n"))
    }

    /// Render the short-term conversation history.
    pub fn recent_history(&self) -> String {
        self.transcript.render()
    }

    /// Clear the short-term transcript. Long-term memory is permanent.
    pub fn forget_recent(&mut self) {
        self.transcript.clear();
        info!("cleared short-term transcript");
    }

    /// Number of exchanges remembered so far.
    pub fn turn_count(&self) -> u64 {
        self.turn_counter
    }

    /// Time of the most recent remembered exchange.
    pub fn last_interaction(&self) -> Option<DateTime<Utc>> {
        self.last_interaction
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryCoordinator;
    use crate::error::{IndexError, MemoryError};
    use crate::model::{Document, RecordMetadata};
    use crate::store::{SemanticStore, VectorIndex};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    /// Records adds and serves them back verbatim, most recent last.
    #[derive(Default)]
    struct RecordingIndex {
        documents: Mutex<Vec<Document>>,
        fail_writes: bool,
    }

    impl RecordingIndex {
        fn failing() -> Self {
            Self {
                documents: Mutex::new(Vec::new()),
                fail_writes: true,
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
            if self.fail_writes {
                return Err(IndexError::new("write refused"));
            }
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
            _query: &str,
            k: usize,
        ) -> Result<Vec<Document>, IndexError> {
            let documents = self.documents.lock();
            Ok(documents.iter().take(k).cloned().collect())
        }
    }

    fn coordinator_with(index: Arc<RecordingIndex>, fan_out: usize) -> MemoryCoordinator {
        MemoryCoordinator::new(SemanticStore::new(index), fan_out)
    }

    #[tokio::test]
    async fn remember_mutates_both_tiers_together() {
        let index = Arc::new(RecordingIndex::default());
        let mut coordinator = coordinator_with(index.clone(), 3);

        coordinator.remember("Hello", "Hi!").await.expect("remember");

        let history = coordinator.recent_history();
        assert_eq!(history, "Human: Hello\nAI: Hi!");
        let hello = history.find("Hello").expect("user line");
        let hi = history.find("Hi!").expect("assistant line");
        assert!(hello < hi);

        let documents = index.documents.lock();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].page_content, "Human: Hello\nAi: Hi!");
        assert_eq!(documents[0].metadata.conversation_id, 1);
    }

    #[tokio::test]
    async fn recall_formats_one_line_per_record() {
        let index = Arc::new(RecordingIndex::default());
        let mut coordinator = coordinator_with(index, 3);

        coordinator.remember("Hello", "Hi!").await.expect("remember");
        let recalled = coordinator.recall("anything").await.expect("recall");

        assert!(recalled.contains("Human: Hello\nAi: Hi!"));
        assert!(recalled.starts_with('['));
        assert_eq!(recalled.matches("\n\n").count(), 0);
    }

    #[tokio::test]
    async fn recall_is_empty_without_matches_and_keeps_counter() {
        let index = Arc::new(RecordingIndex::default());
        let coordinator = coordinator_with(index, 3);

        assert_eq!(coordinator.recall("anything").await.expect("recall"), "");
        assert_eq!(coordinator.turn_count(), 0);
    }

    #[tokio::test]
    async fn counter_increases_by_one_per_exchange() {
        let index = Arc::new(RecordingIndex::default());
        let mut coordinator = coordinator_with(index.clone(), 3);

        for (i, exchange) in [("a", "1"), ("b", "2"), ("c", "3")].iter().enumerate() {
            coordinator
                .remember(exchange.0, exchange.1)
                .await
                .expect("remember");
            assert_eq!(coordinator.turn_count(), i as u64 + 1);
        }

        let documents = index.documents.lock();
        let ids = documents
            .iter()
            .map(|document| document.metadata.conversation_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn transcript_holds_n_lines_per_role_after_n_exchanges() {
        let index = Arc::new(RecordingIndex::default());
        let mut coordinator = coordinator_with(index, 3);

        coordinator.remember("one", "1").await.expect("remember");
        coordinator.remember("two", "2").await.expect("remember");

        let history = coordinator.recent_history();
        assert_eq!(history.matches("Human: ").count(), 2);
        assert_eq!(history.matches("AI: ").count(), 2);
    }

    #[tokio::test]
    async fn forget_recent_spares_long_term_memory() {
        let index = Arc::new(RecordingIndex::default());
        let mut coordinator = coordinator_with(index, 3);

        coordinator.remember("Hello", "Hi!").await.expect("remember");
        coordinator.forget_recent();

        assert_eq!(coordinator.recent_history(), "");
        let recalled = coordinator.recall("Hello").await.expect("recall");
        assert!(recalled.contains("Hello"));

        // forgetting an empty transcript is a no-op
        coordinator.forget_recent();
        assert_eq!(coordinator.recent_history(), "");
    }

    #[tokio::test]
    async fn store_failure_leaves_transcript_updated() {
        let index = Arc::new(RecordingIndex::failing());
        let mut coordinator = coordinator_with(index, 3);

        let err = coordinator
            .remember("Hello", "Hi!")
            .await
            .expect_err("write should fail");
        assert_eq!(err, MemoryError::StoreWrite(IndexError::new("write refused")));

        // asymmetric durability: the turn is already in the transcript
        assert_eq!(coordinator.recent_history(), "Human: Hello\nAI: Hi!");
        assert_eq!(coordinator.turn_count(), 1);
    }

    #[tokio::test]
    async fn last_interaction_tracks_remember_calls() {
        let index = Arc::new(RecordingIndex::default());
        let mut coordinator = coordinator_with(index, 3);

        assert_eq!(coordinator.last_interaction(), None);
        coordinator.remember("Hello", "Hi!").await.expect("remember");
        let first = coordinator.last_interaction().expect("stamped");

        coordinator.remember("Again", "Sure").await.expect("remember");
        let second = coordinator.last_interaction().expect("stamped");
        assert!(second >= first);
    }
}
