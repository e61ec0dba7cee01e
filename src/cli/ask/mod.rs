//! Ask command - one templated chat request against the configured deployment

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::{bindings_map, parse_binding, text_or_file};
use crate::config::AppConfig;
use crate::domain::{ask, ModelParameters, PromptTemplate, SplitResult};
use crate::infrastructure::logging;
use crate::infrastructure::transport::TransportFactory;

/// Arguments for the ask command
#[derive(Args, Clone, Debug)]
pub struct AskArgs {
    /// System prompt template, with `{name}` placeholders
    #[arg(long)]
    pub system: Option<String>,

    /// Read the system prompt template from a file
    #[arg(long, value_name = "PATH")]
    pub system_file: Option<PathBuf>,

    /// Placeholder binding, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub vars: Vec<(String, String)>,

    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Extra model parameter with a JSON value, repeatable (e.g. `top_p=0.9`,
    /// `model="Phi-4"`); strings must be quoted
    #[arg(long = "param", value_name = "NAME=JSON", value_parser = parse_binding)]
    pub params: Vec<(String, String)>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// The user message
    pub user_text: String,
}

impl AskArgs {
    fn parameters(&self) -> anyhow::Result<ModelParameters> {
        let mut parameters = ModelParameters::new();

        if let Some(temperature) = self.temperature {
            parameters = parameters.temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            parameters = parameters.max_tokens(max_tokens);
        }
        for (name, raw) in &self.params {
            let value: serde_json::Value = serde_json::from_str(raw)
                .with_context(|| format!("Invalid JSON for --param {}: {}", name, raw))?;
            parameters.insert(name.clone(), value);
        }

        Ok(parameters)
    }
}

/// Run the ask command
pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let template = PromptTemplate::parse(text_or_file(
        args.system.as_deref(),
        args.system_file.as_ref(),
    )?);
    let bindings = bindings_map(&args.vars);
    let splitter = config.reasoning.splitter()?;
    let parameters = args.parameters()?;
    let transport = TransportFactory::create_azure(&config.foundry)?;

    let result = ask(
        &template,
        &bindings,
        &args.user_text,
        &transport,
        parameters,
        &splitter,
    )
    .await?;

    info!(has_reasoning = result.has_reasoning(), "Received answer");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_text(&result));
    }

    Ok(())
}

fn format_text(result: &SplitResult) -> String {
    match &result.reasoning {
        Some(reasoning) => format!(
            "Reasoning:\n{}\n\nAnswer:\n{}\n",
            reasoning, result.answer
        ),
        None => format!("{}\n", result.answer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(params: Vec<(&str, &str)>) -> AskArgs {
        AskArgs {
            system: None,
            system_file: None,
            vars: vec![],
            temperature: Some(0.5),
            max_tokens: Some(256),
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            json: false,
            user_text: "hi".to_string(),
        }
    }

    #[test]
    fn test_parameters_from_flags() {
        let parameters = args(vec![("top_p", "0.9"), ("model", "\"Phi-4\"")])
            .parameters()
            .unwrap();

        assert_eq!(parameters.get("temperature"), Some(&serde_json::json!(0.5)));
        assert_eq!(parameters.get("max_tokens"), Some(&serde_json::json!(256)));
        assert_eq!(parameters.get("top_p"), Some(&serde_json::json!(0.9)));
        assert_eq!(parameters.get("model"), Some(&serde_json::json!("Phi-4")));
    }

    #[test]
    fn test_invalid_param_json_rejected() {
        let err = args(vec![("top_p", "0,9")]).parameters().unwrap_err();

        assert_eq!(err.to_string(), "Invalid JSON for --param top_p: 0,9");

        let bare = args(vec![("model", "Phi-4")]).parameters();
        assert!(bare.is_err());
    }

    #[test]
    fn test_format_text() {
        let with_reasoning = SplitResult {
            reasoning: Some("Check weather first.".to_string()),
            answer: "Visit Kyoto in April.".to_string(),
            full_text: String::new(),
        };
        assert_eq!(
            format_text(&with_reasoning),
            "Reasoning:\nCheck weather first.\n\nAnswer:\nVisit Kyoto in April.\n"
        );

        let plain = SplitResult {
            reasoning: None,
            answer: "Just a plain answer.".to_string(),
            full_text: String::new(),
        };
        assert_eq!(format_text(&plain), "Just a plain answer.\n");
    }
}
