//! Configuration schema for the chat core.

use crate::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the chatbot and its memory tiers.
///
/// Plain data: constructed once at startup and shared by reference with the
/// chatbot and the memory coordinator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Language model identifier passed to the external provider.
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Sampling temperature for the language model.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Embedding model identifier used by the external vector index.
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Directory where the external vector index persists its data.
    #[serde(default = "default_persist_dir")]
    pub persist_dir: String,
    /// Number of long-term memories retrieved per recall query.
    #[serde(default = "default_memory_k")]
    pub memory_k: usize,
    /// Optional cap on retained recent turns; unbounded when absent.
    #[serde(default)]
    pub max_recent_turns: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            temperature: default_temperature(),
            embedding_model: default_embedding_model(),
            persist_dir: default_persist_dir(),
            memory_k: default_memory_k(),
            max_recent_turns: None,
        }
    }
}

impl ChatConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::new()
    }

    /// Load and validate a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading chat config (path={})", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: ChatConfig = json5::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field-level constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_name.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: "model_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.embedding_model.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: "embedding_model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidField {
                path: "temperature".to_string(),
                message: format!("must be within 0.0..=2.0, got {}", self.temperature),
            });
        }
        if self.memory_k == 0 {
            return Err(ConfigError::InvalidField {
                path: "memory_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(max_turns) = self.max_recent_turns
            && max_turns == 0
        {
            return Err(ConfigError::InvalidField {
                path: "max_recent_turns".to_string(),
                message: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for assembling a `ChatConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct ChatConfigBuilder {
    config: ChatConfig,
}

impl ChatConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: ChatConfig::default(),
        }
    }

    /// Replace the language model identifier.
    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.config.model_name = model_name.into();
        self
    }

    /// Replace the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Replace the embedding model identifier.
    pub fn embedding_model(mut self, embedding_model: impl Into<String>) -> Self {
        self.config.embedding_model = embedding_model.into();
        self
    }

    /// Replace the vector index persistence directory.
    pub fn persist_dir(mut self, persist_dir: impl Into<String>) -> Self {
        self.config.persist_dir = persist_dir.into();
        self
    }

    /// Replace the recall fan-out.
    pub fn memory_k(mut self, memory_k: usize) -> Self {
        self.config.memory_k = memory_k;
        self
    }

    /// Cap the retained recent turns.
    pub fn max_recent_turns(mut self, max_recent_turns: usize) -> Self {
        self.config.max_recent_turns = Some(max_recent_turns);
        self
    }

    /// Finalize, validate, and return the built `ChatConfig`.
    pub fn build(self) -> Result<ChatConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Default language model identifier.
fn default_model_name() -> String {
    "gemini-2.0-flash".to_string()
}

/// Default sampling temperature.
fn default_temperature() -> f32 {
    0.7
}

/// Default embedding model identifier.
fn default_embedding_model() -> String {
    "models/gemini-embedding-exp-03-07".to_string()
}

/// Default persistence directory for the vector index.
fn default_persist_dir() -> String {
    "./chroma_langchain_db".to_string()
}

/// Default number of memories to recall.
fn default_memory_k() -> usize {
    3
}
