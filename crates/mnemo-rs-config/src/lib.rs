//! Configuration models for the mnemo chat core.
//!
//! This crate owns the chat config schema, defaults, validation, and file
//! loading used by hosting glue to construct the chatbot and its memory.

mod error;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::{ChatConfig, ChatConfigBuilder};
