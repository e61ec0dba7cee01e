use std::time::Duration;

use thiserror::Error;
use tracing::info;

use super::azure_inference::{AzureAuth, AzureInferenceConfig, AzureInferenceTransport};
use super::http_client::HttpClient;
use crate::config::FoundryConfig;
use crate::domain::chat::TransportError;

/// Errors building a transport from settings
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("Configuration error: missing {0}")]
    MissingSetting(&'static str),

    #[error("Configuration error: {name} {reason}")]
    InvalidSetting {
        name: &'static str,
        reason: &'static str,
    },

    #[error("Configuration error: set either api_key or bearer_token, not both")]
    AmbiguousAuth,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Factory for creating transports from configuration
#[derive(Debug)]
pub struct TransportFactory;

impl TransportFactory {
    /// Build the Azure AI inference transport described by `config`
    pub fn create_azure(
        config: &FoundryConfig,
    ) -> Result<AzureInferenceTransport<HttpClient>, FactoryError> {
        let azure_config = Self::azure_config(config)?;
        let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

        info!(
            endpoint = %azure_config.endpoint,
            deployment = %azure_config.deployment,
            tenant = config.tenant_id.as_deref().unwrap_or("-"),
            "Created Azure AI inference transport"
        );

        Ok(AzureInferenceTransport::new(client, azure_config))
    }

    fn azure_config(config: &FoundryConfig) -> Result<AzureInferenceConfig, FactoryError> {
        if config.endpoint.trim().is_empty() {
            return Err(FactoryError::MissingSetting("foundry.endpoint"));
        }

        if config.deployment.trim().is_empty() {
            return Err(FactoryError::MissingSetting("foundry.deployment"));
        }

        if config.timeout_secs == 0 {
            return Err(FactoryError::InvalidSetting {
                name: "foundry.timeout_secs",
                reason: "must be greater than zero",
            });
        }

        let auth = match (&config.api_key, &config.bearer_token) {
            (Some(key), None) => AzureAuth::ApiKey(key.clone()),
            (None, Some(token)) => AzureAuth::BearerToken(token.clone()),
            (Some(_), Some(_)) => return Err(FactoryError::AmbiguousAuth),
            (None, None) => {
                return Err(FactoryError::MissingSetting(
                    "foundry.api_key or foundry.bearer_token",
                ));
            }
        };

        Ok(
            AzureInferenceConfig::new(&config.endpoint, &config.deployment, auth)
                .with_api_version(&config.api_version),
        )
    }
}
