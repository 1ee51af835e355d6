//! Error taxonomy shared by templates, adapters, and the registry.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by template rendering and provider exchanges.
#[derive(Debug, Error)]
pub enum Error {
    /// Credential was rejected, or no credential is configured.
    #[error("authentication failed for provider '{provider}': {message}")]
    Authentication { provider: String, message: String },

    /// Provider could not be reached, or answered with a server-side failure.
    #[error("provider '{provider}' unavailable: {message}")]
    ProviderUnavailable { provider: String, message: String },

    /// Provider throttled the request.
    #[error("provider '{provider}' rate limited the request: {message}")]
    RateLimited { provider: String, message: String },

    /// Request parameters the provider (or a local guard) rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Template referenced a variable with no binding.
    #[error("missing value for template variable '{0}'")]
    MissingVariable(String),

    /// Registry lookup for an unknown provider ID.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Provider answered 2xx but the body was not a usable completion.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// Create an authentication error.
    pub fn authentication(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a provider-unavailable error.
    pub fn provider_unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a rate-limited error.
    pub fn rate_limited(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RateLimited {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Classify a non-success HTTP status from a provider exchange.
    ///
    /// 401/403 map to [`Error::Authentication`], 429 to [`Error::RateLimited`],
    /// the request-shape rejections (400, 404, 422) to
    /// [`Error::InvalidConfiguration`], and everything else to
    /// [`Error::ProviderUnavailable`].
    pub fn from_status(provider: &str, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::authentication(provider, message),
            429 => Self::rate_limited(provider, message),
            400 | 404 | 422 => Self::InvalidConfiguration(format!(
                "{provider} rejected the request: {message}"
            )),
            _ => Self::provider_unavailable(provider, format!("HTTP {status}: {message}")),
        }
    }
}
