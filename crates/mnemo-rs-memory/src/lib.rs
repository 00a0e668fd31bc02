//! Two-tier memory for the mnemo chat core.
//!
//! Short-term memory is an ordered transcript of the session's turns;
//! long-term memory is an external similarity-searchable index reached
//! through a narrow adapter. The coordinator owns both tiers and is the
//! single point of truth for what the assistant remembers.

pub mod coordinator;
pub mod error;
pub mod model;
pub mod store;
pub mod transcript;

/// Memory coordinator owning both tiers.
pub use coordinator::MemoryCoordinator;
/// Memory error types.
pub use error::{IndexError, MemoryError};
/// Turn and record models.
pub use model::{Document, MemoryRecord, RecordMetadata, Role, Turn};
/// Vector index seam and the store adapter over it.
pub use store::{SemanticStore, VectorIndex};
/// Short-term transcript buffer.
pub use transcript::Transcript;
