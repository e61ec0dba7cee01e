//! Render command - fill a prompt template without calling a model

use std::path::PathBuf;

use clap::Args;

use super::{bindings_map, parse_binding, text_or_file};
use crate::domain::PromptTemplate;

/// Arguments for the render command
#[derive(Args, Clone, Debug)]
pub struct RenderArgs {
    /// Template text, with `{name}` placeholders
    #[arg(long)]
    pub template: Option<String>,

    /// Read the template from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub template_file: Option<PathBuf>,

    /// Placeholder binding, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub vars: Vec<(String, String)>,
}

/// Run the render command
pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &RenderArgs) -> anyhow::Result<String> {
    let template = PromptTemplate::parse(text_or_file(
        args.template.as_deref(),
        args.template_file.as_ref(),
    )?);

    Ok(template.render(&bindings_map(&args.vars))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateError;

    #[test]
    fn test_render_inline_template() {
        let args = RenderArgs {
            template: Some("Hello {name}, goal: {goal}.".to_string()),
            template_file: None,
            vars: vec![
                ("name".to_string(), "Jordan".to_string()),
                ("goal".to_string(), "endurance".to_string()),
            ],
        };

        assert_eq!(render(&args).unwrap(), "Hello Jordan, goal: endurance.");
    }

    #[test]
    fn test_render_reports_missing_binding() {
        let args = RenderArgs {
            template: Some("Hello {name}.".to_string()),
            template_file: None,
            vars: vec![],
        };

        let err = render(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TemplateError>(),
            Some(&TemplateError::missing_binding("name"))
        );
    }
}
