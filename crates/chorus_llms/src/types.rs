//! Unified types shared by all provider adapters.

use serde::{Deserialize, Serialize};

/// Sampling temperature applied when a config does not override it.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion-length cap applied when a config does not override it.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Token accounting reported by a provider for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Result of one request/response exchange with a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Completion text produced by the model.
    pub text: String,
    /// Model identifier echoed by the provider.
    pub model: String,
    /// Token usage, when the provider reports it.
    pub usage: Option<TokenUsage>,
}
