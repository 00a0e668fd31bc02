use async_trait::async_trait;
use mnemo_rs_core::{LanguageModel, ModelError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Returns a fixed response for every prompt.
#[derive(Debug, Clone)]
pub struct FixedLlm {
    response: String,
}

impl FixedLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for FixedLlm {
    async fn predict(&self, _prompt: &str) -> Result<String, ModelError> {
        Ok(self.response.clone())
    }
}

/// Fails every prediction with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingLlm {
    message: String,
}

impl FailingLlm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for FailingLlm {
    async fn predict(&self, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::new(self.message.clone()))
    }
}

/// Returns a fixed response and records every prompt it sees.
#[derive(Debug, Clone)]
pub struct RecordingLlm {
    response: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LanguageModel for RecordingLlm {
    async fn predict(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.clone())
    }
}
