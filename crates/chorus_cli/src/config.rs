//! Dispatch configuration for the ask flow

use std::str::FromStr;

use chorus_llms::types::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use chorus_llms::{AnthropicConfig, AnthropicProvider, OpenAiConfig, OpenAiProvider};

/// Template used when `ask` is run without one.
pub const DEFAULT_TEMPLATE: &str =
    "What is the capital of {{country}}? What places should I visit here?.";

/// Binding applied when neither a template nor --var flags are given.
pub const DEFAULT_VARIABLE: (&str, &str) = ("country", "France");

/// Providers addressed by the ask flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    /// Dispatch order, which is also the output order.
    pub const DISPATCH_ORDER: [ProviderKind; 2] = [ProviderKind::OpenAi, ProviderKind::Anthropic];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    /// Label shown in the response line.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
        }
    }

    /// Environment variable holding the provider credential.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => OpenAiProvider::API_KEY_ENV,
            ProviderKind::Anthropic => AnthropicProvider::API_KEY_ENV,
        }
    }

    /// Model used when neither env nor flags pick one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => OpenAiConfig::DEFAULT_MODEL,
            ProviderKind::Anthropic => AnthropicConfig::DEFAULT_MODEL,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings for one ask invocation: defaults, then env, then flags.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// OpenAI model identifier
    pub openai_model: String,
    /// Anthropic model identifier
    pub anthropic_model: String,
    /// Sampling temperature shared by both providers
    pub temperature: f32,
    /// Completion-length cap shared by both providers
    pub max_tokens: u32,
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self {
            openai_model: OpenAiConfig::DEFAULT_MODEL.to_string(),
            anthropic_model: AnthropicConfig::DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_openai_model(mut self, model: impl Into<String>) -> Self {
        self.openai_model = model.into();
        self
    }

    pub fn with_anthropic_model(mut self, model: impl Into<String>) -> Self {
        self.anthropic_model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(model) = std::env::var("CHORUS_OPENAI_MODEL") {
            if !model.is_empty() {
                config.openai_model = model;
            }
        }

        if let Ok(model) = std::env::var("CHORUS_ANTHROPIC_MODEL") {
            if !model.is_empty() {
                config.anthropic_model = model;
            }
        }

        if let Ok(temperature) = std::env::var("CHORUS_TEMPERATURE") {
            if let Ok(val) = temperature.parse::<f32>() {
                config.temperature = val;
            }
        }

        if let Ok(max_tokens) = std::env::var("CHORUS_MAX_TOKENS") {
            if let Ok(val) = max_tokens.parse::<u32>() {
                config.max_tokens = val;
            }
        }

        config
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
