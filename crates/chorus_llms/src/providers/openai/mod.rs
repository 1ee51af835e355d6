//! OpenAI provider module
//!
//! Implements the ChatModel trait against the Chat Completions endpoint.
//! API docs: https://platform.openai.com/docs/api-reference/chat

mod convert;
mod provider;
mod types;

pub use provider::OpenAiProvider;
pub use types::{OpenAiConfig, OpenAiRequest, OpenAiResponse};
