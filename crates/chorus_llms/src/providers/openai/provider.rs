//! OpenAI provider implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::convert::{extract_error_message, from_openai_response, to_openai_request};
use super::types::{OpenAiConfig, OpenAiResponse};
use crate::error::{Error, Result};
use crate::provider::ChatModel;
use crate::types::ChatCompletion;

/// OpenAI chat-completion provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    /// Create a new OpenAI provider. The credential is not checked here;
    /// it is validated on first use.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::new();
        Self { config, client }
    }

    /// Create provider from environment
    pub fn from_env() -> Self {
        Self::new(OpenAiConfig::default())
    }

    /// Guards that run before any network traffic.
    fn check_request(&self, prompt: &str) -> Result<()> {
        if self.config.api_key.is_empty() {
            return Err(Error::authentication(
                "openai",
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
impl ChatModel for OpenAiProvider {
    fn provider_id(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<ChatCompletion> {
        self.check_request(prompt)?;

        let url = format!("{}chat/completions", self.config.base_url);
        let request = to_openai_request(&self.config, prompt);
        debug!(model = %request.model, "sending OpenAI chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::provider_unavailable("openai", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body).unwrap_or(body);
            return Err(Error::from_status("openai", status.as_u16(), message));
        }

        let openai_resp: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| Error::invalid_response(format!("malformed OpenAI body: {e}")))?;

        let completion = from_openai_response(openai_resp)?;
        if let Some(usage) = completion.usage {
            debug!(total_tokens = usage.total_tokens, "OpenAI exchange complete");
        }
        Ok(completion)
    }
}
