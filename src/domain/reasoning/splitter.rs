//! Reasoning extraction
//!
//! Reasoning models wrap their intermediate thinking in a pair of tags
//! (`<thinking>...</thinking>`, or `<think>...</think>` for DeepSeek-R1)
//! ahead of the final answer. This module separates the two.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_OPEN_TAG: &str = "<thinking>";
pub const DEFAULT_CLOSE_TAG: &str = "</thinking>";

/// Reasoning extraction errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReasoningError {
    #[error("Malformed reasoning: found {open_tag} without a matching {close_tag}")]
    MalformedReasoning { open_tag: String, close_tag: String },

    #[error("Reasoning tags must not be empty")]
    EmptyTag,
}

/// What to do when the open tag is present but never closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedPolicy {
    /// Everything after the open tag is reasoning; the answer is empty
    #[default]
    Lenient,
    /// Fail with `ReasoningError::MalformedReasoning`
    Strict,
}

/// Delimiters around a reasoning trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningTags {
    open: String,
    close: String,
}

impl ReasoningTags {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, ReasoningError> {
        let open = open.into();
        let close = close.into();

        if open.is_empty() || close.is_empty() {
            return Err(ReasoningError::EmptyTag);
        }

        Ok(Self { open, close })
    }

    /// `<think>` / `</think>`, as emitted by DeepSeek-R1
    pub fn think() -> Self {
        Self {
            open: "<think>".to_string(),
            close: "</think>".to_string(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for ReasoningTags {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_TAG.to_string(),
            close: DEFAULT_CLOSE_TAG.to_string(),
        }
    }
}

/// A response separated into reasoning and answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Trimmed text between the tags, `None` when no open tag was found
    pub reasoning: Option<String>,
    /// Trimmed text after the close tag, or the whole response when untagged
    pub answer: String,
    /// The response exactly as received
    pub full_text: String,
}

impl SplitResult {
    fn untagged(raw: &str) -> Self {
        Self {
            reasoning: None,
            answer: raw.to_string(),
            full_text: raw.to_string(),
        }
    }

    pub fn has_reasoning(&self) -> bool {
        self.reasoning.is_some()
    }
}

enum Located<'a> {
    Untagged,
    Closed { reasoning: &'a str, answer: &'a str },
    Unterminated { reasoning: &'a str },
}

/// First open tag, then the first close tag at or after its end.
fn locate<'a>(raw: &'a str, tags: &ReasoningTags) -> Located<'a> {
    let Some(open_at) = raw.find(&tags.open) else {
        return Located::Untagged;
    };

    let body_start = open_at + tags.open.len();
    let body = &raw[body_start..];

    match body.find(&tags.close) {
        Some(close_at) => Located::Closed {
            reasoning: &body[..close_at],
            answer: &body[close_at + tags.close.len()..],
        },
        None => Located::Unterminated { reasoning: body },
    }
}

/// Split `raw` into reasoning and answer, treating an unclosed trace leniently.
pub fn split(raw: &str, tags: &ReasoningTags) -> SplitResult {
    match locate(raw, tags) {
        Located::Untagged => SplitResult::untagged(raw),
        Located::Closed { reasoning, answer } => SplitResult {
            reasoning: Some(reasoning.trim().to_string()),
            answer: answer.trim().to_string(),
            full_text: raw.to_string(),
        },
        Located::Unterminated { reasoning } => SplitResult {
            reasoning: Some(reasoning.trim().to_string()),
            answer: String::new(),
            full_text: raw.to_string(),
        },
    }
}

/// Tags plus an unterminated-trace policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasoningSplitter {
    tags: ReasoningTags,
    policy: UnterminatedPolicy,
}

impl ReasoningSplitter {
    pub fn new(tags: ReasoningTags) -> Self {
        Self {
            tags,
            policy: UnterminatedPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnterminatedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tags(&self) -> &ReasoningTags {
        &self.tags
    }

    pub fn policy(&self) -> UnterminatedPolicy {
        self.policy
    }

    pub fn split(&self, raw: &str) -> Result<SplitResult, ReasoningError> {
        if self.policy == UnterminatedPolicy::Strict
            && matches!(locate(raw, &self.tags), Located::Unterminated { .. })
        {
            return Err(ReasoningError::MalformedReasoning {
                open_tag: self.tags.open.clone(),
                close_tag: self.tags.close.clone(),
            });
        }

        Ok(split(raw, &self.tags))
    }
}
