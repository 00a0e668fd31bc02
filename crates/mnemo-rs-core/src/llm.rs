//! External language model seam.

use crate::error::ModelError;
use async_trait::async_trait;

/// Contract required from the external language model.
///
/// One rendered prompt in, one completion out. Calls are awaited to
/// completion with no retry; failures surface to the single recovery
/// boundary in the chatbot.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Produce a completion for the rendered prompt.
    async fn predict(&self, prompt: &str) -> Result<String, ModelError>;
}
