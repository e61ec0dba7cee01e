use serde::Deserialize;

use crate::domain::reasoning::{
    ReasoningError, ReasoningSplitter, ReasoningTags, UnterminatedPolicy, DEFAULT_CLOSE_TAG,
    DEFAULT_OPEN_TAG,
};
use crate::infrastructure::transport::DEFAULT_API_VERSION;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub foundry: FoundryConfig,
    pub reasoning: ReasoningConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Azure AI Foundry project settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct FoundryConfig {
    /// Project or resource endpoint, e.g. `https://<name>.services.ai.azure.com`
    pub endpoint: String,
    /// Model deployment name, e.g. `DeepSeek-R1`
    pub deployment: String,
    /// Entra ID tenant, for the external credential flow
    pub tenant_id: Option<String>,
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for FoundryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoundryConfig")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("tenant_id", &self.tenant_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReasoningConfig {
    pub open_tag: String,
    pub close_tag: String,
    pub policy: UnterminatedPolicy,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for FoundryConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            deployment: String::new(),
            tenant_id: None,
            api_key: None,
            bearer_token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            open_tag: DEFAULT_OPEN_TAG.to_string(),
            close_tag: DEFAULT_CLOSE_TAG.to_string(),
            policy: UnterminatedPolicy::default(),
        }
    }
}

impl ReasoningConfig {
    pub fn splitter(&self) -> Result<ReasoningSplitter, ReasoningError> {
        let tags = ReasoningTags::new(&self.open_tag, &self.close_tag)?;
        Ok(ReasoningSplitter::new(tags).with_policy(self.policy))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::environment())
    }

    /// Env values stay strings; numeric-looking secrets must not be reparsed.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("APP").separator("__")
    }

    fn load_with(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}
