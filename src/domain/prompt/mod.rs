//! Prompt templates with named placeholders

mod template;

pub use template::{extract_placeholders, render_template, PromptTemplate, TemplateError};
