use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a chat request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("User text must not be empty")]
    EmptyUserText,
}

/// Model options forwarded to the transport unchanged.
///
/// Keys are whatever the target endpoint understands (`temperature`,
/// `max_tokens`, `top_p`, `model`, ...). Nothing in this crate interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelParameters(BTreeMap<String, serde_json::Value>);

impl ModelParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn temperature(self, temperature: f64) -> Self {
        self.with("temperature", temperature)
    }

    pub fn max_tokens(self, max_tokens: u32) -> Self {
        self.with("max_tokens", max_tokens)
    }

    pub fn top_p(self, top_p: f64) -> Self {
        self.with("top_p", top_p)
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<serde_json::Value>> FromIterator<(K, V)> for ModelParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single chat turn: optional system prompt plus one user message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    system: Option<String>,
    user: String,
    parameters: ModelParameters,
}

impl ChatRequest {
    /// Build a request with no system prompt and no parameters
    pub fn new(user: impl Into<String>) -> Result<Self, RequestError> {
        Self::builder().user(user).build()
    }

    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::new()
    }

    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }
}

/// Builder for ChatRequest
#[derive(Debug, Default)]
pub struct ChatRequestBuilder {
    system: Option<String>,
    user: String,
    parameters: ModelParameters,
}

impl ChatRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.system = Some(content.into());
        self
    }

    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.user = content.into();
        self
    }

    pub fn parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.parameters.insert(name, value);
        self
    }

    pub fn build(self) -> Result<ChatRequest, RequestError> {
        if self.user.is_empty() {
            return Err(RequestError::EmptyUserText);
        }

        Ok(ChatRequest {
            system: self.system,
            user: self.user,
            parameters: self.parameters,
        })
    }
}
