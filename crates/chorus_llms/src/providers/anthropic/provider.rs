//! Anthropic provider implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::convert::{extract_error_message, from_anthropic_response, to_anthropic_request};
use super::types::{AnthropicConfig, AnthropicResponse};
use crate::error::{Error, Result};
use crate::provider::ChatModel;
use crate::types::ChatCompletion;

/// Anthropic chat-completion provider
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "ANTHROPIC_API_KEY";

    /// API version header required by the Messages endpoint
    pub const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider. The credential is not checked here;
    /// it is validated on first use.
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::new();
        Self { config, client }
    }

    /// Create provider from environment
    pub fn from_env() -> Self {
        Self::new(AnthropicConfig::default())
    }

    /// Guards that run before any network traffic.
    fn check_request(&self, prompt: &str) -> Result<()> {
        if self.config.api_key.is_empty() {
            return Err(Error::authentication(
                "anthropic",
                format!("no credential configured; set {}", Self::API_KEY_ENV),
            ));
        }
        if prompt.is_empty() {
            return Err(Error::invalid_configuration("prompt must not be empty"));
        }
        if self.config.max_tokens == 0 {
            return Err(Error::invalid_configuration("max_tokens must be at least 1"));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatModel for AnthropicProvider {
    fn provider_id(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<ChatCompletion> {
        self.check_request(prompt)?;

        let url = format!("{}v1/messages", self.config.base_url);
        let request = to_anthropic_request(&self.config, prompt);
        debug!(model = %request.model, "sending Anthropic messages request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.config.api_key.as_str())
            .header("anthropic-version", Self::API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::provider_unavailable("anthropic", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body).unwrap_or(body);
            return Err(Error::from_status("anthropic", status.as_u16(), message));
        }

        let anthropic_resp: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| Error::invalid_response(format!("malformed Anthropic body: {e}")))?;

        let completion = from_anthropic_response(anthropic_resp)?;
        if let Some(usage) = completion.usage {
            debug!(total_tokens = usage.total_tokens, "Anthropic exchange complete");
        }
        Ok(completion)
    }
}
