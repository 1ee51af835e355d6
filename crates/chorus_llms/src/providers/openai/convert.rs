//! Conversion between unified types and OpenAI types

use super::types::{OpenAiConfig, OpenAiErrorBody, OpenAiMessage, OpenAiRequest, OpenAiResponse};
use crate::error::{Error, Result};
use crate::types::{ChatCompletion, TokenUsage};

/// Build an OpenAI request carrying the prompt as a single user message.
pub fn to_openai_request(config: &OpenAiConfig, prompt: &str) -> OpenAiRequest {
    OpenAiRequest {
        model: config.model.clone(),
        messages: vec![OpenAiMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}

/// Convert an OpenAI response to the unified completion.
pub fn from_openai_response(resp: OpenAiResponse) -> Result<ChatCompletion> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("no choices in OpenAI response"))?;

    let text = choice
        .message
        .content
        .filter(|content| !content.is_empty())
        .ok_or_else(|| Error::invalid_response("no content in OpenAI response"))?;

    let usage = resp.usage.map(|u| TokenUsage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(ChatCompletion {
        text,
        model: resp.model,
        usage,
    })
}

/// Pull the human-readable message out of an OpenAI error body, if any.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<OpenAiErrorBody>(body)
        .ok()
        .map(|e| e.error.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_single_user_message() {
        let config = OpenAiConfig::new("key")
            .with_model("gpt-4o")
            .with_temperature(0.7)
            .with_max_tokens(300);
        let request = to_openai_request(&config, "What is the capital of France?");

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "What is the capital of France?");
        assert_eq!(request.max_tokens, 300);
    }

    #[test]
    fn test_response_maps_text_and_usage() {
        let body = r#"{
            "id": "chatcmpl-123",
            "model": "gpt-4o-2024-05-13",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "The capital of France is Paris."},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 14, "completion_tokens": 8, "total_tokens": 22}
        }"#;
        let resp: OpenAiResponse = serde_json::from_str(body).unwrap();
        let completion = from_openai_response(resp).unwrap();

        assert_eq!(completion.text, "The capital of France is Paris.");
        assert_eq!(completion.model, "gpt-4o-2024-05-13");
        let usage = completion.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 14);
        assert_eq!(usage.completion_tokens, 8);
        assert_eq!(usage.total_tokens, 22);
    }

    #[test]
    fn test_empty_choices_is_invalid_response() {
        let body = r#"{"model": "gpt-4o", "choices": [], "usage": null}"#;
        let resp: OpenAiResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            from_openai_response(resp),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
        assert_eq!(extract_error_message("not json"), None);
    }
}
