//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Send one templated prompt to every configured chat-completion provider
#[derive(Parser)]
#[command(name = "chorus", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a prompt template and dispatch it to each provider in turn
    Ask {
        /// Template text; `{{name}}` markers are filled from --var bindings
        template: Option<String>,
        /// Template variable binding in name=value form (repeatable)
        #[arg(short, long, value_name = "NAME=VALUE")]
        var: Vec<String>,
        /// OpenAI model to use. Uses CHORUS_OPENAI_MODEL env if not set.
        #[arg(long)]
        openai_model: Option<String>,
        /// Anthropic model to use. Uses CHORUS_ANTHROPIC_MODEL env if not set.
        #[arg(long)]
        anthropic_model: Option<String>,
        /// Sampling temperature shared by both providers
        #[arg(long)]
        temperature: Option<f32>,
        /// Maximum completion tokens shared by both providers
        #[arg(long)]
        max_tokens: Option<u32>,
    },
    /// Inspect known LLM providers
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
}

#[derive(Subcommand)]
pub enum ProvidersAction {
    /// List providers and credential status
    List,
    /// List known models for a provider
    Models {
        /// Provider ID (openai, anthropic)
        provider: String,
    },
}
