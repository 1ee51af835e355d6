//! Conversion between unified types and Anthropic types

use super::types::{
    AnthropicConfig, AnthropicContentBlock, AnthropicErrorBody, AnthropicMessage,
    AnthropicRequest, AnthropicResponse, AnthropicResponseBlock,
};
use crate::error::{Error, Result};
use crate::types::{ChatCompletion, TokenUsage};

/// Build an Anthropic request carrying the prompt as a single user message.
pub fn to_anthropic_request(config: &AnthropicConfig, prompt: &str) -> AnthropicRequest {
    AnthropicRequest {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        messages: vec![AnthropicMessage {
            role: "user".to_string(),
            content: vec![AnthropicContentBlock {
                type_: "text".to_string(),
                text: prompt.to_string(),
            }],
        }],
    }
}

/// Convert an Anthropic response to the unified completion.
///
/// Text blocks are concatenated in order; any other block kind is skipped.
pub fn from_anthropic_response(resp: AnthropicResponse) -> Result<ChatCompletion> {
    let text: String = resp
        .content
        .iter()
        .filter_map(|block| match block {
            AnthropicResponseBlock::Text { text } => Some(text.as_str()),
            AnthropicResponseBlock::Other => None,
        })
        .collect();

    if text.is_empty() {
        return Err(Error::invalid_response("no text content in Anthropic response"));
    }

    let usage = resp.usage.map(|u| TokenUsage {
        prompt_tokens: u.input_tokens,
        completion_tokens: u.output_tokens,
        total_tokens: u.input_tokens.saturating_add(u.output_tokens),
    });

    Ok(ChatCompletion {
        text,
        model: resp.model,
        usage,
    })
}

/// Pull the human-readable message out of an Anthropic error body, if any.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<AnthropicErrorBody>(body)
        .ok()
        .map(|e| e.error.message)
}
