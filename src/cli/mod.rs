//! CLI module for foundry-chat
//!
//! Subcommands:
//! - `ask`: render a system prompt, query the configured model, print reasoning and answer
//! - `render`: render a prompt template locally
//! - `split`: split saved model output into reasoning and answer

pub mod ask;
pub mod render;
pub mod split;

use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

/// foundry-chat - templated prompts and reasoning extraction for Azure AI Foundry models
#[derive(Parser)]
#[command(name = "foundry-chat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send one templated chat request and split the reply
    Ask(ask::AskArgs),

    /// Render a prompt template with bindings
    Render(render::RenderArgs),

    /// Split text into reasoning and answer
    Split(split::SplitArgs),
}

/// Parse `name=value`, splitting on the first `=`
pub fn parse_binding(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;

    if name.is_empty() {
        return Err(format!("empty name in '{}'", raw));
    }

    Ok((name.to_string(), value.to_string()))
}

pub(crate) fn bindings_map(pairs: &[(String, String)]) -> HashMap<String, String> {
    pairs.iter().cloned().collect()
}

/// Inline text wins; otherwise read the file, `-` meaning stdin.
pub(crate) fn text_or_file(inline: Option<&str>, file: Option<&PathBuf>) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => bail!("pass either inline text or a file, not both"),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => read_input(Some(path)),
        (None, None) => Ok(String::new()),
    }
}

pub(crate) fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            parse_binding("goal=run a 10k"),
            Ok(("goal".to_string(), "run a 10k".to_string()))
        );
        assert_eq!(
            parse_binding("eq=a=b"),
            Ok(("eq".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_binding("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_binding("novalue").is_err());
        assert!(parse_binding("=x").is_err());
    }

    #[test]
    fn test_cli_parses_ask() {
        let cli = Cli::try_parse_from([
            "foundry-chat",
            "ask",
            "--system",
            "Coach {name}",
            "--var",
            "name=Jordan",
            "--temperature",
            "0.3",
            "How do I start?",
        ])
        .unwrap();

        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.system.as_deref(), Some("Coach {name}"));
                assert_eq!(args.vars, vec![("name".to_string(), "Jordan".to_string())]);
                assert_eq!(args.temperature, Some(0.3));
                assert_eq!(args.user_text, "How do I start?");
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_text_or_file_rejects_both() {
        let path = PathBuf::from("prompt.txt");
        assert!(text_or_file(Some("x"), Some(&path)).is_err());
        assert_eq!(text_or_file(Some("x"), None).unwrap(), "x");
        assert_eq!(text_or_file(None, None).unwrap(), "");
    }
}
