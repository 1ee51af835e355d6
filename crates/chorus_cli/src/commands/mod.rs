//! Command dispatch.

pub mod ask;
pub mod providers;

use crate::cli::{Cli, Command};
use anyhow::Result;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Ask {
            template,
            var,
            openai_model,
            anthropic_model,
            temperature,
            max_tokens,
        } => {
            ask::handle(
                template,
                var,
                openai_model,
                anthropic_model,
                temperature,
                max_tokens,
            )
            .await
        }
        Command::Providers { action } => providers::handle(action),
    }
}
