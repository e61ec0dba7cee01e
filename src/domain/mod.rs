//! Domain layer - templating, chat requests, reasoning extraction and orchestration

pub mod ask;
pub mod chat;
pub mod error;
pub mod prompt;
pub mod reasoning;

pub use ask::{ask, Asker};
pub use chat::{
    ChatRequest, ChatRequestBuilder, ModelParameters, RawResponse, RequestError, Transport,
    TransportError,
};
pub use error::AskError;
pub use prompt::{extract_placeholders, render_template, PromptTemplate, TemplateError};
pub use reasoning::{
    split, ReasoningError, ReasoningSplitter, ReasoningTags, SplitResult, UnterminatedPolicy,
};
