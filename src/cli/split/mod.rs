//! Split command - separate reasoning from answer in saved model output

use std::path::PathBuf;

use clap::Args;

use super::read_input;
use crate::config::AppConfig;
use crate::domain::{ReasoningSplitter, ReasoningTags, SplitResult, UnterminatedPolicy};

/// Arguments for the split command
#[derive(Args, Clone, Debug)]
pub struct SplitArgs {
    /// Opening reasoning tag (defaults to the configured one)
    #[arg(long)]
    pub open: Option<String>,

    /// Closing reasoning tag (defaults to the configured one)
    #[arg(long)]
    pub close: Option<String>,

    /// Fail when the opening tag is never closed
    #[arg(long)]
    pub strict: bool,

    /// Input file; stdin when omitted or `-`
    pub input: Option<PathBuf>,
}

/// Run the split command
pub async fn run(args: SplitArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let raw = read_input(args.input.as_ref())?;
    let result = split_with(&args, &config, &raw)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn split_with(args: &SplitArgs, config: &AppConfig, raw: &str) -> anyhow::Result<SplitResult> {
    let mut splitter = config.reasoning.splitter()?;

    if args.open.is_some() || args.close.is_some() {
        let tags = ReasoningTags::new(
            args.open.as_deref().unwrap_or(splitter.tags().open()),
            args.close.as_deref().unwrap_or(splitter.tags().close()),
        )?;
        splitter = ReasoningSplitter::new(tags).with_policy(splitter.policy());
    }

    if args.strict {
        splitter = splitter.with_policy(UnterminatedPolicy::Strict);
    }

    Ok(splitter.split(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReasoningError;

    fn args(open: Option<&str>, close: Option<&str>, strict: bool) -> SplitArgs {
        SplitArgs {
            open: open.map(str::to_string),
            close: close.map(str::to_string),
            strict,
            input: None,
        }
    }

    #[test]
    fn test_split_with_configured_tags() {
        let result = split_with(
            &args(None, None, false),
            &AppConfig::default(),
            "<thinking>Check weather first.</thinking>Visit Kyoto in April.",
        )
        .unwrap();

        assert_eq!(result.answer, "Visit Kyoto in April.");
    }

    #[test]
    fn test_split_with_tag_overrides() {
        let result = split_with(
            &args(Some("<think>"), Some("</think>"), false),
            &AppConfig::default(),
            "<think>r</think>a",
        )
        .unwrap();

        assert_eq!(result.reasoning.as_deref(), Some("r"));
        assert_eq!(result.answer, "a");
    }

    #[test]
    fn test_split_strict_flag() {
        let err = split_with(
            &args(None, None, true),
            &AppConfig::default(),
            "<thinking>cut off",
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReasoningError>(),
            Some(ReasoningError::MalformedReasoning { .. })
        ));
    }
}
