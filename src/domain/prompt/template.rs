//! Prompt template parsing and rendering
//!
//! Supports placeholder syntax: `{name}`
//! - `name` is a case-sensitive identifier (`[A-Za-z_][A-Za-z0-9_]*`)
//! - Every placeholder is required; rendering fails on the first unbound one
//! - Any other brace text (`{}`, `{ x }`, `{"json": 1}`) is kept literally

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Regex to match placeholder patterns: {name}
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Missing binding for placeholder: {name}")]
    MissingBinding { name: String },
}

impl TemplateError {
    pub fn missing_binding(name: impl Into<String>) -> Self {
        Self::MissingBinding { name: name.into() }
    }
}

/// A parsed prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Original template content
    content: String,
    /// Distinct placeholder names in scan order
    placeholders: Vec<String>,
}

impl PromptTemplate {
    /// Parse a template string and collect its placeholders
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut placeholders = Vec::new();
        let mut seen = HashSet::new();

        for cap in PLACEHOLDER_PATTERN.captures_iter(&content) {
            let name = &cap[1];
            if seen.insert(name.to_string()) {
                placeholders.push(name.to_string());
            }
        }

        Self {
            content,
            placeholders,
        }
    }

    /// Get the original template content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the distinct placeholder names in the order they first appear
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Check if the template has any placeholders
    pub fn has_placeholders(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Names of placeholders that have no entry in `bindings`, in scan order
    pub fn missing_bindings(&self, bindings: &HashMap<String, String>) -> Vec<&str> {
        self.placeholders
            .iter()
            .filter(|name| !bindings.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Render the template with the provided bindings.
    ///
    /// Bound values are inserted verbatim and never re-scanned, so a value
    /// that itself looks like `{name}` stays as-is. Bindings without a
    /// matching placeholder are ignored.
    pub fn render(&self, bindings: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(self.content.len());
        let mut last = 0;

        for cap in PLACEHOLDER_PATTERN.captures_iter(&self.content) {
            let whole = cap.get(0).unwrap();
            let name = &cap[1];

            let value = bindings
                .get(name)
                .ok_or_else(|| TemplateError::missing_binding(name))?;

            rendered.push_str(&self.content[last..whole.start()]);
            rendered.push_str(value);
            last = whole.end();
        }

        rendered.push_str(&self.content[last..]);
        Ok(rendered)
    }
}

impl From<&str> for PromptTemplate {
    fn from(content: &str) -> Self {
        Self::parse(content)
    }
}

impl From<String> for PromptTemplate {
    fn from(content: String) -> Self {
        Self::parse(content)
    }
}

/// Convenience function to render a template string directly
pub fn render_template(
    template: &str,
    bindings: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    PromptTemplate::parse(template).render(bindings)
}

/// Extract placeholder names from a template string
pub fn extract_placeholders(template: &str) -> Vec<String> {
    PromptTemplate::parse(template).placeholders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_no_placeholders() {
        let template = PromptTemplate::parse("Hello, world!");
        assert!(!template.has_placeholders());
        assert!(template.placeholders().is_empty());
    }

    #[test]
    fn test_parse_placeholders_in_scan_order() {
        let template = PromptTemplate::parse("{b} then {a} then {b} again");
        assert_eq!(template.placeholders(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_render_two_placeholders() {
        let template = PromptTemplate::parse("Hello {name}, goal: {goal}.");
        let result = template
            .render(&bindings(&[("name", "Jordan"), ("goal", "endurance")]))
            .unwrap();

        assert_eq!(result, "Hello Jordan, goal: endurance.");
    }

    #[test]
    fn test_render_missing_binding() {
        let template = PromptTemplate::parse("Hello {name}.");

        match template.render(&HashMap::new()) {
            Err(TemplateError::MissingBinding { name }) => assert_eq!(name, "name"),
            other => panic!("Expected MissingBinding error, got {:?}", other),
        }
    }

    #[test]
    fn test_render_reports_first_missing_in_scan_order() {
        let template = PromptTemplate::parse("{first} {second} {third}");
        let err = template
            .render(&bindings(&[("first", "1")]))
            .unwrap_err();

        assert_eq!(err, TemplateError::missing_binding("second"));
        assert_eq!(err.to_string(), "Missing binding for placeholder: second");
    }

    #[test]
    fn test_render_ignores_extra_bindings() {
        let template = PromptTemplate::parse("Plan for {name}");
        let result = template
            .render(&bindings(&[("name", "Ana"), ("unused", "x")]))
            .unwrap();

        assert_eq!(result, "Plan for Ana");
    }

    #[test]
    fn test_placeholders_are_case_sensitive() {
        let template = PromptTemplate::parse("{Name}");
        let err = template.render(&bindings(&[("name", "x")])).unwrap_err();

        assert_eq!(err, TemplateError::missing_binding("Name"));
    }

    #[test]
    fn test_render_preserves_unicode_and_literal_braces() {
        let template = PromptTemplate::parse(
            "🏋️ Coach {coach} says: reply as {\"plan\": [...]} with {} and { spaced }",
        );
        let result = template.render(&bindings(&[("coach", "Zoë")])).unwrap();

        assert_eq!(
            result,
            "🏋️ Coach Zoë says: reply as {\"plan\": [...]} with {} and { spaced }"
        );
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let template = PromptTemplate::parse("{a}|{b}");
        let result = template
            .render(&bindings(&[("a", "{b}"), ("b", "two")]))
            .unwrap();

        assert_eq!(result, "{b}|two");
    }

    #[test]
    fn test_render_leaves_no_placeholder_syntax() {
        let template = PromptTemplate::parse(
            "You are a {role}.\n\nFocus on {focus}, then {role} again for {audience}.",
        );
        let values = bindings(&[
            ("role", "fitness coach"),
            ("focus", "recovery"),
            ("audience", "runners"),
        ]);
        let result = template.render(&values).unwrap();

        for name in template.placeholders() {
            assert!(!result.contains(&format!("{{{}}}", name)));
        }
        assert!(result.contains("fitness coach again"));
    }

    #[test]
    fn test_missing_bindings_lists_all_unbound() {
        let template = PromptTemplate::parse("{a} {b} {c}");
        let missing = template.missing_bindings(&bindings(&[("b", "x")]));

        assert_eq!(missing, vec!["a", "c"]);
    }

    #[test]
    fn test_convenience_render_function() {
        let result = render_template("Hello, {name}!", &bindings(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_extract_placeholders_function() {
        let names = extract_placeholders("{a} {b_2} {_c} {3d}");
        assert_eq!(names, vec!["a", "b_2", "_c"]);
    }
}
