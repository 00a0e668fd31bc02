//! Response orchestration for the mnemo chat core.
//!
//! This crate turns one user message into one assistant reply while keeping
//! the two memory tiers consistent: recall relevant long-term memories,
//! render the prompt, invoke the external model, and write the exchange
//! back through the coordinator.

pub mod chatbot;
pub mod error;
pub mod llm;
pub mod prompt;

/// Chatbot facade and its reply type.
pub use chatbot::{Chatbot, ChatReply, FALLBACK_REPLY};
/// Orchestration error types.
pub use error::{ChatError, ModelError};
/// External language model seam.
pub use llm::LanguageModel;
/// Prompt template with the three named slots.
pub use prompt::PromptTemplate;
