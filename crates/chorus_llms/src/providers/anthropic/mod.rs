//! Anthropic provider module
//!
//! Implements the ChatModel trait against the Messages endpoint.
//! API docs: https://docs.anthropic.com/en/api/messages

mod convert;
mod provider;
mod types;

pub use provider::AnthropicProvider;
pub use types::{AnthropicConfig, AnthropicRequest, AnthropicResponse};
