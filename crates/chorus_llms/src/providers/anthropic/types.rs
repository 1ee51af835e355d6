//! Anthropic-specific types

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Configuration for the Anthropic adapter.
///
/// Constructors never validate the credential; a missing or rejected key
/// surfaces as an authentication error on the first `generate` call.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL (default: https://api.anthropic.com/)
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion-length cap in tokens
    pub max_tokens: u32,
}

impl AnthropicConfig {
    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "claude-3-5-sonnet-20240620";

    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com/".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set completion-length cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self::new(std::env::var("ANTHROPIC_API_KEY").unwrap_or_default())
    }
}

/// Anthropic messages request
#[derive(Debug, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<AnthropicMessage>,
}

/// Anthropic message
#[derive(Debug, Serialize)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: Vec<AnthropicContentBlock>,
}

/// Anthropic request content block
#[derive(Debug, Serialize)]
pub struct AnthropicContentBlock {
    #[serde(rename = "type")]
    pub type_: String,
    pub text: String,
}

/// Anthropic messages response
#[derive(Debug, Deserialize)]
pub struct AnthropicResponse {
    pub model: String,
    pub content: Vec<AnthropicResponseBlock>,
    pub usage: Option<AnthropicUsage>,
    pub stop_reason: Option<String>,
}

/// Anthropic response content block. Non-text blocks are skipped.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicResponseBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Anthropic usage statistics
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Anthropic error envelope, e.g. `{"type":"error","error":{"message":"..."}}`
#[derive(Debug, Deserialize)]
pub struct AnthropicErrorBody {
    pub error: AnthropicErrorDetail,
}

/// Anthropic error detail
#[derive(Debug, Deserialize)]
pub struct AnthropicErrorDetail {
    pub message: String,
}
