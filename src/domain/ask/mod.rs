//! Request orchestration: render the system prompt, send one chat request,
//! split the reply into reasoning and answer.

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use super::chat::{ChatRequest, ModelParameters, Transport};
use super::error::AskError;
use super::prompt::PromptTemplate;
use super::reasoning::{ReasoningSplitter, SplitResult};

/// Render → send → split, once.
///
/// An empty rendered template means the request carries no system message.
/// Errors from each stage are returned as-is; the transport is called at
/// most once and never retried.
#[instrument(
    skip_all,
    fields(transport = transport.name(), placeholders = template.placeholders().len())
)]
pub async fn ask<T: Transport + ?Sized>(
    template: &PromptTemplate,
    bindings: &HashMap<String, String>,
    user_text: &str,
    transport: &T,
    parameters: ModelParameters,
    splitter: &ReasoningSplitter,
) -> Result<SplitResult, AskError> {
    let system = template.render(bindings)?;

    let mut builder = ChatRequest::builder()
        .user(user_text)
        .parameters(parameters);
    if !system.is_empty() {
        builder = builder.system(system);
    }
    let request = builder.build()?;

    debug!(
        system_len = request.system().map(str::len).unwrap_or(0),
        user_len = request.user().len(),
        "Sending chat request"
    );

    let raw = transport.send(&request).await.inspect_err(|e| {
        warn!(error = %e, status = ?e.status(), "Transport failed");
    })?;

    let result = splitter.split(raw.as_str())?;
    debug!(
        has_reasoning = result.has_reasoning(),
        answer_len = result.answer.len(),
        "Split model response"
    );

    Ok(result)
}

/// A transport paired with a splitter, for repeated `ask` calls
#[derive(Debug, Clone)]
pub struct Asker<T> {
    transport: T,
    splitter: ReasoningSplitter,
}

impl<T: Transport> Asker<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            splitter: ReasoningSplitter::default(),
        }
    }

    pub fn with_splitter(mut self, splitter: ReasoningSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn splitter(&self) -> &ReasoningSplitter {
        &self.splitter
    }

    pub async fn ask(
        &self,
        template: &PromptTemplate,
        bindings: &HashMap<String, String>,
        user_text: &str,
        parameters: ModelParameters,
    ) -> Result<SplitResult, AskError> {
        ask(
            template,
            bindings,
            user_text,
            &self.transport,
            parameters,
            &self.splitter,
        )
        .await
    }
}
