use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::chat::{ChatRequest, RawResponse, Transport, TransportError};

const TRANSPORT_NAME: &str = "azure_ai_inference";

pub const DEFAULT_API_VERSION: &str = "2024-05-01-preview";

/// How requests authenticate against the endpoint.
///
/// Token acquisition (Entra ID, managed identity) happens outside this
/// crate; a bearer token is passed in already issued.
#[derive(Clone)]
pub enum AzureAuth {
    ApiKey(String),
    BearerToken(String),
}

impl std::fmt::Debug for AzureAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::BearerToken(_) => f.write_str("BearerToken(***)"),
        }
    }
}

/// Azure AI Foundry model inference configuration
#[derive(Debug, Clone)]
pub struct AzureInferenceConfig {
    pub endpoint: String,
    pub deployment: String,
    pub auth: AzureAuth,
    pub api_version: String,
}

impl AzureInferenceConfig {
    pub fn new(endpoint: impl Into<String>, deployment: impl Into<String>, auth: AzureAuth) -> Self {
        Self {
            endpoint: endpoint.into(),
            deployment: deployment.into(),
            auth,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }
}

/// Chat-completions transport for models hosted in Azure AI Foundry
pub struct AzureInferenceTransport<C: HttpClientTrait> {
    client: C,
    config: AzureInferenceConfig,
    auth_header: (&'static str, String),
}

impl<C: HttpClientTrait> std::fmt::Debug for AzureInferenceTransport<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureInferenceTransport")
            .field("client", &self.client)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: HttpClientTrait> AzureInferenceTransport<C> {
    pub fn new(client: C, config: AzureInferenceConfig) -> Self {
        let auth_header = match &config.auth {
            AzureAuth::ApiKey(key) => ("api-key", key.clone()),
            AzureAuth::BearerToken(token) => ("Authorization", format!("Bearer {}", token)),
        };

        Self {
            client,
            config,
            auth_header,
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.api_version
        )
    }

    /// Messages and deployment name first; caller parameters are merged on
    /// top as-is, so an explicit `model` parameter wins over the deployment.
    /// The message list is owned here: a `messages` parameter is rejected.
    fn build_request(&self, request: &ChatRequest) -> Result<serde_json::Value, TransportError> {
        if request.parameters().contains("messages") {
            return Err(TransportError::new(
                TRANSPORT_NAME,
                "Parameter 'messages' is reserved for the chat messages",
            ));
        }


        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system() {
            messages.push(InferenceMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(InferenceMessage {
            role: "user",
            content: request.user(),
        });

        let mut body = serde_json::json!({
            "messages": messages,
            "model": self.config.deployment,
        });

        for (name, value) in request.parameters().iter() {
            body[name.as_str()] = value.clone();
        }

        Ok(body)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Content-Type", "application/json"),
            (self.auth_header.0, self.auth_header.1.as_str()),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<RawResponse, TransportError> {
        let response: InferenceResponse = serde_json::from_value(json).map_err(|e| {
            TransportError::new(TRANSPORT_NAME, format!("Failed to parse response: {}", e))
                .with_source(e)
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::new(TRANSPORT_NAME, "No choices in response"))?;

        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(TransportError::new(
                TRANSPORT_NAME,
                "Response blocked by content filter",
            ));
        }

        let content = choice
            .message
            .content
            .ok_or_else(|| TransportError::new(TRANSPORT_NAME, "Choice has no content"))?;

        if let Some(usage) = response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion usage"
            );
        }

        Ok(RawResponse::from(content))
    }
}

#[async_trait]
impl<C: HttpClientTrait> Transport for AzureInferenceTransport<C> {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse, TransportError> {
        let url = self.build_url();
        let body = self.build_request(request)?;

        let response = self
            .client
            .post_json(&url, self.headers(), &body)
            .await
            .map_err(|e| {
                let mut error = TransportError::new(TRANSPORT_NAME, e.message().to_string());
                if let Some(status) = e.status() {
                    error = error.with_status(status);
                }
                error.with_source(e)
            })?;

        self.parse_response(response)
    }

    fn name(&self) -> &'static str {
        TRANSPORT_NAME
    }
}

#[derive(Debug, Serialize)]
struct InferenceMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    choices: Vec<InferenceChoice>,
    usage: Option<InferenceUsage>,
}

#[derive(Debug, Deserialize)]
struct InferenceChoice {
    message: InferenceResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InferenceResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InferenceUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
