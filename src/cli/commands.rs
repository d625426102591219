//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::glossary::{extract_glossary, Glossary, StopReason};
use crate::llm::build_provider;

/// Extract a glossary from a transcription file or stdin
pub async fn extract(
    settings: &Settings,
    file: Option<PathBuf>,
    max_tries: Option<u32>,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    if !matches!(format, "txt" | "json") {
        anyhow::bail!("Unsupported format: {}. Supported: txt, json", format);
    }

    let transcription = read_transcription(file)?;
    if transcription.trim().is_empty() {
        anyhow::bail!("Transcription is empty, nothing to extract");
    }

    let provider = build_provider(settings)?;
    let max_tries = max_tries.unwrap_or(settings.extraction.max_tries);

    let refinement = extract_glossary(provider.as_ref(), &transcription, max_tries).await?;

    match refinement.stop {
        StopReason::NoNewTerms => {
            tracing::info!(rounds = refinement.rounds, "glossary converged");
        }
        StopReason::MaxTriesReached => {
            tracing::warn!(max_tries, "stopped before convergence");
        }
    }

    if refinement.glossary.is_empty() {
        println!("No internal terms found.");
        return Ok(());
    }

    let content = if format == "json" {
        serde_json::to_string_pretty(&refinement.glossary)?
    } else {
        render_glossary(&refinement.glossary)
    };

    if let Some(path) = output {
        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write glossary to {}", path.display()))?;
        println!("Glossary written to: {}", path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// Read the transcription from a file, or from stdin when no file is given.
fn read_transcription(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcription file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read transcription from stdin")?;
            Ok(buffer)
        }
    }
}

/// Render a glossary as `name: definition` lines.
fn render_glossary(glossary: &Glossary) -> String {
    glossary
        .terms
        .iter()
        .map(|term| format!("{}: {}", term.name, term.definition))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::Term;

    #[test]
    fn render_glossary_emits_one_line_per_term() {
        let glossary = Glossary {
            terms: vec![
                Term {
                    name: "TPG".to_string(),
                    definition: "internal payment gateway".to_string(),
                    is_new: true,
                },
                Term {
                    name: "V0bis".to_string(),
                    definition: "-".to_string(),
                    is_new: false,
                },
            ],
        };

        let rendered = render_glossary(&glossary);
        assert_eq!(rendered, "TPG: internal payment gateway\nV0bis: -");
    }
}
