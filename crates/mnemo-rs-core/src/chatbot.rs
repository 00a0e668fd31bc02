//! Chatbot facade: one user message in, one assistant reply out.

use crate::error::ChatError;
use crate::llm::LanguageModel;
use crate::prompt::PromptTemplate;
use log::{error, info};
use mnemo_rs_config::ChatConfig;
use mnemo_rs_memory::{MemoryCoordinator, SemanticStore, VectorIndex};
use serde::Serialize;
use std::sync::Arc;

/// User-safe reply returned whenever producing a real one fails.
pub const FALLBACK_REPLY: &str = "I'm sorry, I encountered an error. Please try again.";

/// Outcome of one `respond` call.
///
/// Failure never unwinds out of `respond`; it is folded into this tagged
/// reply so hosting glue can render the text and log the cause.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatReply {
    /// Assistant text shown to the user.
    pub text: String,
    /// Long-term memories blended into the prompt.
    pub used_memories: String,
    /// Whether a real reply was produced.
    pub ok: bool,
    /// Cause of failure when `ok` is false.
    pub error: Option<String>,
}

/// Turns user input into assistant replies while keeping memory consistent.
pub struct Chatbot {
    config: Arc<ChatConfig>,
    llm: Arc<dyn LanguageModel>,
    memory: MemoryCoordinator,
    template: PromptTemplate,
}

impl Chatbot {
    /// Assemble a chatbot from its config and external collaborators.
    pub fn new(
        config: Arc<ChatConfig>,
        llm: Arc<dyn LanguageModel>,
        index: Arc<dyn VectorIndex>,
    ) -> Self {
        info!(
            "initializing chatbot (model={}, memory_k={})",
            config.model_name, config.memory_k
        );
        let mut memory = MemoryCoordinator::new(SemanticStore::new(index), config.memory_k);
        if let Some(max_turns) = config.max_recent_turns {
            memory = memory.with_max_recent_turns(max_turns);
        }
        Self {
            config,
            llm,
            memory,
            template: PromptTemplate::default(),
        }
    }

    /// Replace the default prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Produce one assistant reply for `user_input`.
    ///
    /// Single recovery boundary: any failure from recall, model invocation,
    /// or the memory write-back is folded into the fixed fallback reply.
    /// A model failure means the exchange is never remembered; a write-back
    /// failure still returns the fallback even though the transcript
    /// already holds the turn.
    pub async fn respond(&mut self, user_input: &str) -> ChatReply {
        match self.try_respond(user_input).await {
            Ok((text, used_memories)) => ChatReply {
                text,
                used_memories,
                ok: true,
                error: None,
            },
            Err(err) => {
                error!("failed to generate response (cause={err})");
                ChatReply {
                    text: FALLBACK_REPLY.to_string(),
                    used_memories: String::new(),
                    ok: false,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    async fn try_respond(&mut self, user_input: &str) -> Result<(String, String), ChatError> {
        let relevant_memories = self.memory.recall(user_input).await?;
        let recent_history = self.memory.recent_history();

        let prompt = self
            .template
            .render(&relevant_memories, &recent_history, user_input);

        let output = self.llm.predict(&prompt).await?;

        self.memory.remember(user_input, &output).await?;
        Ok((output, relevant_memories))
    }

    /// Clear the short-term transcript; long-term memory is untouched.
    pub fn reset_memory(&mut self) {
        self.memory.forget_recent();
    }

    /// Number of exchanges remembered this session.
    pub fn turn_count(&self) -> u64 {
        self.memory.turn_count()
    }

    /// Time of the most recent remembered exchange.
    pub fn last_interaction(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.memory.last_interaction()
    }

    /// Configuration the chatbot was built with.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}
