//! Answer transformer adapters.
//!
//! Provides [`PlaceholderTransformer`], the stand-in implementation of the
//! [`AnswerTransformer`](qa_application::AnswerTransformer) port.

mod placeholder;

pub use placeholder::{PLACEHOLDER_PREFIX, PlaceholderTransformer};
