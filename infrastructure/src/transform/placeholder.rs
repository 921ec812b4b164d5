//! Placeholder answer transformer.
//!
//! Stands in for a language-model call until a real transformer is wired.

use async_trait::async_trait;
use qa_application::{AnswerTransformer, TransformError};

/// Text prepended to every answer by [`PlaceholderTransformer`].
pub const PLACEHOLDER_PREFIX: &str = "result from llm transform call with data ";

/// Deterministic transformer that prefixes the answer with a fixed string.
///
/// Never fails.
#[derive(Debug, Clone)]
pub struct PlaceholderTransformer {
    prefix: String,
}

impl PlaceholderTransformer {
    pub fn new() -> Self {
        Self::with_prefix(PLACEHOLDER_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PlaceholderTransformer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerTransformer for PlaceholderTransformer {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn transform(&self, primary: &str) -> Result<String, TransformError> {
        Ok(format!("{}{}", self.prefix, primary))
    }
}
