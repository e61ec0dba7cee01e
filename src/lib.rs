//! foundry-chat
//!
//! Templated chat requests against models hosted in Azure AI Foundry:
//! - Prompt templates with `{name}` placeholders, validated before sending
//! - A `Transport` seam with an Azure AI inference implementation
//! - Splitting `<thinking>`/`<think>` reasoning traces from the final answer
//!
//! ```no_run
//! use std::collections::HashMap;
//! use foundry_chat::domain::{ask, ModelParameters, PromptTemplate, ReasoningSplitter, ReasoningTags};
//! use foundry_chat::infrastructure::transport::{
//!     AzureAuth, AzureInferenceConfig, AzureInferenceTransport, HttpClient,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = AzureInferenceTransport::new(
//!     HttpClient::new(),
//!     AzureInferenceConfig::new(
//!         "https://my-project.services.ai.azure.com",
//!         "DeepSeek-R1",
//!         AzureAuth::ApiKey("...".to_string()),
//!     ),
//! );
//! let template = PromptTemplate::parse("You are a fitness coach for {name}.");
//! let bindings = HashMap::from([("name".to_string(), "Jordan".to_string())]);
//!
//! let result = ask(
//!     &template,
//!     &bindings,
//!     "How should I train for a 10k?",
//!     &transport,
//!     ModelParameters::new().max_tokens(2048),
//!     &ReasoningSplitter::new(ReasoningTags::think()),
//! )
//! .await?;
//!
//! println!("{}", result.answer);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
