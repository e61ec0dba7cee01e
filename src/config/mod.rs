//! Layered settings: `config/default`, `config/local`, then `APP__*` env vars

mod app_config;

pub use app_config::{AppConfig, FoundryConfig, LogFormat, LoggingConfig, ReasoningConfig};
