use thiserror::Error;

use super::chat::{RequestError, TransportError};
use super::prompt::TemplateError;
use super::reasoning::ReasoningError;

/// Errors surfaced by `ask`.
///
/// Each variant is the component error unchanged; `Display` and `source()`
/// pass straight through.
#[derive(Debug, Error)]
pub enum AskError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Reasoning(#[from] ReasoningError),
}

impl AskError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Name of the unbound placeholder, for template failures
    pub fn missing_binding(&self) -> Option<&str> {
        match self {
            Self::Template(TemplateError::MissingBinding { name }) => Some(name),
            _ => None,
        }
    }
}
