//! Test helpers shared across mnemo crates.

pub mod index;
pub mod llm;

pub use index::{FailingIndex, KeywordIndex, RecordingIndex};
pub use llm::{FailingLlm, FixedLlm, RecordingLlm};
