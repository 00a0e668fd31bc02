//! Error types for memory operations.

/// Opaque failure raised by an external vector index implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct IndexError(pub String);

impl IndexError {
    /// Wrap an implementation-specific failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors returned by the semantic store adapter and the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    /// Durable write to the external index failed.
    #[error("store write failed: {0}")]
    StoreWrite(IndexError),
    /// Similarity query against the external index failed.
    #[error("store query failed: {0}")]
    StoreQuery(IndexError),
}
