//! Separating a model's reasoning trace from its answer

mod splitter;

pub use splitter::{
    split, ReasoningError, ReasoningSplitter, ReasoningTags, SplitResult, UnterminatedPolicy,
    DEFAULT_CLOSE_TAG, DEFAULT_OPEN_TAG,
};
