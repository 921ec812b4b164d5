//! Answer transformer port
//!
//! Defines the interface for deriving a `transformed` value from a
//! user's `primary` answer. A real deployment may back this with a
//! language-model call; the service treats every call as a potential
//! suspension point.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while transforming an answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Transform failed: {0}")]
    Failed(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Transformer for answer text
///
/// Implementations (adapters) live in the infrastructure layer.
/// They must not have side effects visible to the service.
#[async_trait]
pub trait AnswerTransformer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Derive the transformed value for one primary answer
    async fn transform(&self, primary: &str) -> Result<String, TransformError>;
}
