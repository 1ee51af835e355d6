//! The chat-model capability every provider adapter implements.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ChatCompletion;

/// One blocking request/response exchange with a chat-completion provider.
///
/// Implementations send the rendered prompt as a single user message and
/// return the completion once the provider has answered in full. Credential
/// problems surface here, on first use, not at construction time.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Stable provider ID, e.g. `"openai"` or `"anthropic"`.
    fn provider_id(&self) -> &str;

    /// Send one prompt and wait for the complete answer.
    async fn generate(&self, prompt: &str) -> Result<ChatCompletion>;
}
