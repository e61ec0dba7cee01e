//! Chat request model and the transport seam

mod request;
mod response;
mod transport;

pub use request::{ChatRequest, ChatRequestBuilder, ModelParameters, RequestError};
pub use response::RawResponse;
pub use transport::{Transport, TransportError};

#[cfg(test)]
pub use transport::{mock, MockTransport};
