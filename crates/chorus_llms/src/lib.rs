//! chorus_llms — Provider-agnostic chat completions with prompt templating.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 PromptTemplate                       │
//! │        "{{name}}" markers -> rendered prompt         │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────────────────────▼───────────────────────────┐
//! │                  ProviderRegistry                    │
//! │  ┌──────────────────────────────────────────────┐   │
//! │  │  HashMap<String, Arc<dyn ChatModel>>          │   │
//! │  └──────────────────────────────────────────────┘   │
//! │               │                    │                 │
//! │               ▼                    ▼                 │
//! │        ┌───────────┐       ┌───────────┐            │
//! │        │  OpenAI   │       │ Anthropic │            │
//! │        │  Provider │       │ Provider  │            │
//! │        └───────────┘       └───────────┘            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use chorus_llms::{ChatModel, OpenAiProvider, PromptTemplate};
//!
//! # async fn demo() -> chorus_llms::Result<()> {
//! let template = PromptTemplate::new("What is the capital of {{country}}?");
//! let prompt = template.render(&HashMap::from([
//!     ("country".to_string(), "France".to_string()),
//! ]))?;
//!
//! let openai = OpenAiProvider::from_env();
//! let completion = openai.generate(&prompt).await?;
//! println!("OpenAI Response: {}", completion.text);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod template;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export core abstractions
pub use error::{Error, Result};
pub use provider::{ChatModel, ProviderRegistry};
pub use template::PromptTemplate;

// Re-export provider implementations
pub use providers::anthropic::{AnthropicConfig, AnthropicProvider};
pub use providers::openai::{OpenAiConfig, OpenAiProvider};

// Re-export commonly used types
pub use types::{ChatCompletion, TokenUsage};
