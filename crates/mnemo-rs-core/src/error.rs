//! Error types for the orchestration crate.

use mnemo_rs_memory::MemoryError;
use thiserror::Error;

/// Failure raised by an external language model implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("model invocation failed: {0}")]
pub struct ModelError(pub String);

impl ModelError {
    /// Wrap a provider-specific failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors arising while producing one assistant reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Memory subsystem failure, store write or query.
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
    /// External language model failure.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
    /// Prompt template is missing a required slot.
    #[error("invalid prompt template: missing slot {{{0}}}")]
    Template(String),
}
