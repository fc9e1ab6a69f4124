//! LLM client for sales script generation
//!
//! Talks to an OpenAI-compatible chat-completions endpoint and builds the
//! system prompt that fixes the tagged-section output format.

mod ai_types;
mod client;
mod error;
pub mod prompt;
mod script;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, LlmClient, LlmConfig, truncate};
pub use error::LlmError;
pub use prompt::{DEFAULT_LANGUAGE, compose_system_prompt};
