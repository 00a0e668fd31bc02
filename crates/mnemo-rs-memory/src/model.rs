//! Turn and record models shared across the memory tiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Speaker role for a transcript turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Assistant,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Transcript label used when rendering the short-term history.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Human",
            Role::Assistant => "AI",
        }
    }
}

/// One message in the short-term transcript. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    /// Role that produced the message.
    pub role: Role,
    /// Message content.
    pub text: String,
    /// Timestamp for the message.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a turn stamped with the current time.
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Metadata attached to every long-term memory record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordMetadata {
    /// Time the exchange was remembered.
    pub timestamp: DateTime<Utc>,
    /// Monotone exchange counter owned by the coordinator.
    pub conversation_id: u64,
}

/// One persisted unit of long-term memory. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryRecord {
    /// Stored exchange text.
    pub text: String,
    /// Metadata for recall formatting and filtering.
    pub metadata: RecordMetadata,
}

/// Raw item returned by the external vector index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Indexed content.
    pub page_content: String,
    /// Metadata stored alongside the content.
    pub metadata: RecordMetadata,
}

impl From<Document> for MemoryRecord {
    fn from(document: Document) -> Self {
        Self {
            text: document.page_content,
            metadata: document.metadata,
        }
    }
}
