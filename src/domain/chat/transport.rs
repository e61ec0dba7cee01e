use std::error::Error as StdError;

use async_trait::async_trait;
use thiserror::Error;

use super::{ChatRequest, RawResponse};

#[cfg(test)]
use mockall::automock;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure reported by a transport.
///
/// Callers get the transport name, a message and, when there is one, the
/// underlying cause through `source()`. Nothing here is retried.
#[derive(Debug, Error)]
#[error("Transport error: {transport} - {message}")]
pub struct TransportError {
    transport: String,
    message: String,
    status: Option<u16>,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    pub fn new(transport: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            transport: transport.into(),
            message: message.into(),
            status: None,
            source: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn transport(&self) -> &str {
        &self.transport
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when the transport speaks HTTP and got a response
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

/// Sends one chat request to a hosted model and returns its raw text.
///
/// Authentication, timeouts and endpoint details belong to implementations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse, TransportError>;

    /// Short name used in logs and errors
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
