//! `chorus providers` subcommands.

use anyhow::{anyhow, Result};

use crate::cli::ProvidersAction;
use crate::config::ProviderKind;
use crate::output;

// Static catalogs; neither provider needs a network call to list them.
const OPENAI_MODELS: &[&str] = &[
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4-turbo",
    "gpt-4",
    "gpt-3.5-turbo",
];

const ANTHROPIC_MODELS: &[&str] = &[
    "claude-3-5-sonnet-20240620",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
];

struct ProviderInfo {
    kind: ProviderKind,
    has_key: bool,
}

fn known_providers() -> Vec<ProviderInfo> {
    ProviderKind::DISPATCH_ORDER
        .iter()
        .map(|&kind| ProviderInfo {
            kind,
            has_key: std::env::var(kind.api_key_env()).is_ok_and(|v| !v.is_empty()),
        })
        .collect()
}

fn catalog(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::OpenAi => OPENAI_MODELS,
        ProviderKind::Anthropic => ANTHROPIC_MODELS,
    }
}

pub fn handle(action: ProvidersAction) -> Result<()> {
    match action {
        ProvidersAction::List => list(),
        ProvidersAction::Models { provider } => models(&provider),
    }
}

fn list() -> Result<()> {
    let infos = known_providers();

    output::header("Known Providers");

    let mut table = output::table();
    table.set_header(vec![
        comfy_table::Cell::new("Provider")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        comfy_table::Cell::new("Status")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        comfy_table::Cell::new("Default model")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ]);

    for info in &infos {
        let status = if info.has_key {
            comfy_table::Cell::new("configured").fg(comfy_table::Color::Green)
        } else {
            comfy_table::Cell::new("missing API key").fg(comfy_table::Color::Yellow)
        };
        table.add_row(vec![
            comfy_table::Cell::new(info.kind.as_str()).fg(comfy_table::Color::Green),
            status,
            comfy_table::Cell::new(info.kind.default_model()),
        ]);
    }

    let items: Vec<(&str, &str)> = infos
        .iter()
        .map(|info| {
            (
                info.kind.as_str(),
                if info.has_key {
                    "configured"
                } else {
                    "missing API key"
                },
            )
        })
        .collect();
    output::table_print(&table, &items);

    if infos.iter().any(|info| !info.has_key) {
        output::dim("Set OPENAI_API_KEY and ANTHROPIC_API_KEY to configure credentials");
    }

    Ok(())
}

fn models(provider_id: &str) -> Result<()> {
    let kind: ProviderKind = provider_id
        .parse()
        .map_err(|_| anyhow!("unknown provider '{provider_id}' (expected: openai, anthropic)"))?;
    let models = catalog(kind);
    let default_model = kind.default_model();

    output::header(&format!("Models for {kind}"));

    let mut table = output::table();
    output::table_header(&mut table, "Model", "Notes");

    let mut items: Vec<(&str, &str)> = Vec::new();
    for &model in models {
        let note = if model == default_model { "default" } else { "" };
        output::table_row(&mut table, model, note);
        items.push((model, note));
    }

    output::table_print(&table, &items);

    Ok(())
}
