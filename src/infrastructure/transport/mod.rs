//! Transport implementations

mod azure_inference;
mod factory;
mod http_client;

pub use azure_inference::{
    AzureAuth, AzureInferenceConfig, AzureInferenceTransport, DEFAULT_API_VERSION,
};
pub use factory::{FactoryError, TransportFactory};
pub use http_client::{HttpClient, HttpClientTrait};
