use crate::error::Error;
use crate::provider::ChatModel;
use crate::providers::anthropic::{AnthropicConfig, AnthropicProvider};

fn provider_for(server: &mockito::ServerGuard, api_key: &str) -> AnthropicProvider {
    AnthropicProvider::new(AnthropicConfig::new(api_key).with_base_url(server.url()))
}

#[tokio::test]
async fn test_generate_returns_completion() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", AnthropicProvider::API_VERSION)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "msg_01",
                "model": "claude-3-5-sonnet-20240620",
                "content": [
                    {"type": "text", "text": "Paris. The Louvre and the Eiffel Tower are worth a visit."}
                ],
                "usage": {"input_tokens": 21, "output_tokens": 14},
                "stop_reason": "end_turn"
            }"#,
        )
        .create_async()
        .await;

    let provider = provider_for(&server, "test-key");
    let completion = provider
        .generate("What is the capital of France?")
        .await
        .unwrap();

    assert_eq!(
        completion.text,
        "Paris. The Louvre and the Eiffel Tower are worth a visit."
    );
    assert_eq!(completion.model, "claude-3-5-sonnet-20240620");
    assert_eq!(completion.usage.unwrap().total_tokens, 35);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_key_is_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(401)
        .with_body(r#"{"type": "error", "error": {"type": "authentication_error", "message": "invalid x-api-key"}}"#)
        .create_async()
        .await;

    let provider = provider_for(&server, "bad-key");
    let err = provider.generate("hello").await.unwrap_err();

    match err {
        Error::Authentication { provider, message } => {
            assert_eq!(provider, "anthropic");
            assert!(message.contains("invalid x-api-key"));
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn test_overloaded_api_is_provider_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(529)
        .with_body(r#"{"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}"#)
        .create_async()
        .await;

    let provider = provider_for(&server, "test-key");
    let err = provider.generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn test_throttled_request_is_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(429)
        .with_body(r#"{"type": "error", "error": {"type": "rate_limit_error", "message": "Number of requests has exceeded your rate limit"}}"#)
        .create_async()
        .await;

    let provider = provider_for(&server, "test-key");
    let err = provider.generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::RateLimited { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_provider_unavailable() {
    // No listener on port 9; the exchange fails at connect, before any
    // HTTP status exists to classify.
    let provider = AnthropicProvider::new(
        AnthropicConfig::new("test-key").with_base_url("http://127.0.0.1:9"),
    );
    let err = provider.generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn test_empty_credential_fails_before_any_request() {
    let provider = AnthropicProvider::new(
        AnthropicConfig::new("").with_base_url("http://127.0.0.1:9"),
    );
    let err = provider.generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
}

#[tokio::test]
async fn test_zero_max_tokens_fails_before_any_request() {
    let provider = AnthropicProvider::new(
        AnthropicConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_max_tokens(0),
    );
    let err = provider.generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}
