//! `chorus ask` — render a prompt template and dispatch it to each provider in turn.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use chorus_llms::{
    AnthropicConfig, AnthropicProvider, ChatModel, OpenAiConfig, OpenAiProvider, PromptTemplate,
    ProviderRegistry,
};
use tracing::debug;

use crate::config::{DispatchConfig, ProviderKind, DEFAULT_TEMPLATE, DEFAULT_VARIABLE};
use crate::output;

/// One registry entry paired with its response-line label.
pub(crate) struct LabeledModel {
    pub label: &'static str,
    pub model: Arc<dyn ChatModel>,
}

pub async fn handle(
    template: Option<String>,
    vars: Vec<String>,
    openai_model: Option<String>,
    anthropic_model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
) -> Result<()> {
    let mut config = DispatchConfig::from_env();
    if let Some(model) = openai_model {
        config = config.with_openai_model(model);
    }
    if let Some(model) = anthropic_model {
        config = config.with_anthropic_model(model);
    }
    if let Some(temperature) = temperature {
        config = config.with_temperature(temperature);
    }
    if let Some(max_tokens) = max_tokens {
        config = config.with_max_tokens(max_tokens);
    }

    let (template, variables) = resolve_inputs(template, &vars)?;
    let prompt = template.render(&variables)?;
    debug!(template = %template.source(), prompt = %prompt, "rendered prompt");

    let models = build_models(&config)?;
    run_sequence(&models, &prompt, |label, text| output::respond(label, text)).await?;
    Ok(())
}

/// Pick template and bindings. A bare `chorus ask` uses the built-in
/// question with its default binding; any explicit input disables that.
fn resolve_inputs(
    template: Option<String>,
    vars: &[String],
) -> Result<(PromptTemplate, HashMap<String, String>)> {
    let use_defaults = template.is_none() && vars.is_empty();
    let template = PromptTemplate::new(template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()));
    let mut variables = parse_variables(vars)?;
    if use_defaults {
        let (name, value) = DEFAULT_VARIABLE;
        variables.insert(name.to_string(), value.to_string());
    }
    Ok((template, variables))
}

fn parse_variables(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut variables = HashMap::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("invalid --var '{pair}': expected name=value");
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("invalid --var '{pair}': variable name is empty");
        }
        variables.insert(name.to_string(), value.to_string());
    }
    Ok(variables)
}

/// Register both adapters and pair each with its output label, in dispatch order.
fn build_models(config: &DispatchConfig) -> Result<Vec<LabeledModel>> {
    let registry = ProviderRegistry::new()
        .register(
            ProviderKind::OpenAi.as_str(),
            OpenAiProvider::new(
                OpenAiConfig::default()
                    .with_model(config.openai_model.clone())
                    .with_temperature(config.temperature)
                    .with_max_tokens(config.max_tokens),
            ),
        )
        .register(
            ProviderKind::Anthropic.as_str(),
            AnthropicProvider::new(
                AnthropicConfig::default()
                    .with_model(config.anthropic_model.clone())
                    .with_temperature(config.temperature)
                    .with_max_tokens(config.max_tokens),
            ),
        );

    let mut models = Vec::new();
    for kind in ProviderKind::DISPATCH_ORDER {
        models.push(LabeledModel {
            label: kind.label(),
            model: registry.get_provider(kind.as_str())?,
        });
    }
    Ok(models)
}

/// Dispatch the prompt to each model in order, emitting a response line as
/// soon as each exchange completes. The first failure aborts the remaining
/// dispatches; lines already emitted stand.
pub(crate) async fn run_sequence(
    models: &[LabeledModel],
    prompt: &str,
    mut emit: impl FnMut(&str, &str),
) -> chorus_llms::Result<()> {
    for entry in models {
        let spinner = output::spinner(&format!("Waiting for {}...", entry.label));
        match entry.model.generate(prompt).await {
            Ok(completion) => {
                spinner.finish_and_clear();
                debug!(
                    provider = %entry.model.provider_id(),
                    model = %completion.model,
                    usage = ?completion.usage,
                    "exchange complete"
                );
                emit(entry.label, &completion.text);
            }
            Err(e) => {
                output::spinner_error(&spinner, &format!("{} exchange failed", entry.label));
                return Err(e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chorus_llms::{ChatCompletion, Error};

    use super::*;

    struct ReplyModel {
        id: &'static str,
        text: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ChatModel for ReplyModel {
        fn provider_id(&self) -> &str {
            self.id
        }

        async fn generate(&self, _prompt: &str) -> chorus_llms::Result<ChatCompletion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChatCompletion {
                text: self.text.to_string(),
                model: "mock".to_string(),
                usage: None,
            })
        }
    }

    struct FailingModel {
        id: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ChatModel for FailingModel {
        fn provider_id(&self) -> &str {
            self.id
        }

        async fn generate(&self, _prompt: &str) -> chorus_llms::Result<ChatCompletion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::authentication(self.id, "no credential configured"))
        }
    }

    #[tokio::test]
    async fn test_run_sequence_emits_lines_in_dispatch_order() {
        let models = vec![
            LabeledModel {
                label: "OpenAI",
                model: Arc::new(ReplyModel {
                    id: "openai",
                    text: "Paris is the capital of France.",
                    calls: Arc::new(AtomicUsize::new(0)),
                }),
            },
            LabeledModel {
                label: "Anthropic",
                model: Arc::new(ReplyModel {
                    id: "anthropic",
                    text: "Paris. The Louvre is worth a visit.",
                    calls: Arc::new(AtomicUsize::new(0)),
                }),
            },
        ];

        let mut lines = Vec::new();
        run_sequence(&models, "prompt", |label, text| {
            lines.push(output::response_line(label, text))
        })
        .await
        .unwrap();

        assert_eq!(
            lines,
            vec![
                "OpenAI Response: Paris is the capital of France.",
                "Anthropic Response: Paris. The Louvre is worth a visit.",
            ]
        );
    }

    #[tokio::test]
    async fn test_run_sequence_stops_after_first_failure() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let models = vec![
            LabeledModel {
                label: "OpenAI",
                model: Arc::new(FailingModel {
                    id: "openai",
                    calls: first_calls.clone(),
                }),
            },
            LabeledModel {
                label: "Anthropic",
                model: Arc::new(ReplyModel {
                    id: "anthropic",
                    text: "never sent",
                    calls: second_calls.clone(),
                }),
            },
        ];

        let mut lines: Vec<String> = Vec::new();
        let err = run_sequence(&models, "prompt", |label, text| {
            lines.push(output::response_line(label, text))
        })
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Authentication { .. }));
        assert!(lines.is_empty());
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_sequence_keeps_lines_emitted_before_failure() {
        let models = vec![
            LabeledModel {
                label: "OpenAI",
                model: Arc::new(ReplyModel {
                    id: "openai",
                    text: "Paris.",
                    calls: Arc::new(AtomicUsize::new(0)),
                }),
            },
            LabeledModel {
                label: "Anthropic",
                model: Arc::new(FailingModel {
                    id: "anthropic",
                    calls: Arc::new(AtomicUsize::new(0)),
                }),
            },
        ];

        let mut lines: Vec<String> = Vec::new();
        let result = run_sequence(&models, "prompt", |label, text| {
            lines.push(output::response_line(label, text))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(lines, vec!["OpenAI Response: Paris."]);
    }

    #[test]
    fn test_resolve_inputs_defaults_to_builtin_question() {
        let (template, variables) = resolve_inputs(None, &[]).unwrap();
        let prompt = template.render(&variables).unwrap();
        assert_eq!(
            prompt,
            "What is the capital of France? What places should I visit here?."
        );
    }

    #[test]
    fn test_resolve_inputs_custom_template_gets_no_default_binding() {
        let (template, variables) =
            resolve_inputs(Some("Hi {{who}}".to_string()), &[]).unwrap();
        let err = template.render(&variables).unwrap_err();
        assert!(matches!(err, Error::MissingVariable(name) if name == "who"));
    }

    #[test]
    fn test_parse_variables() {
        let variables = parse_variables(&[
            "country=France".to_string(),
            "note=a=b".to_string(),
        ])
        .unwrap();
        assert_eq!(variables["country"], "France");
        assert_eq!(variables["note"], "a=b");

        let err = parse_variables(&["oops".to_string()]).unwrap_err();
        assert!(err.to_string().contains("expected name=value"));
    }
}
