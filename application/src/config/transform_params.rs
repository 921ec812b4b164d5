//! Transform parameters — answer transformation control.
//!
//! [`TransformParams`] groups the static parameters that control how
//! [`QaService`](crate::use_cases::qa_service::QaService) drives the
//! answer transformer during a submission. These are application-layer
//! concerns, not domain policy.

use std::time::Duration;

/// What a submission does when the transformer fails for one answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransformFailurePolicy {
    /// Fail the whole submission; nothing is persisted.
    #[default]
    FailRequest,
    /// Store the given value as the `transformed` text and keep going.
    Fallback(String),
}

/// Answer transformation control parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformParams {
    /// Upper bound on a single transform call. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Failure handling for a single answer.
    pub on_failure: TransformFailurePolicy,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            on_failure: TransformFailurePolicy::FailRequest,
        }
    }
}

impl TransformParams {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fallback(mut self, value: impl Into<String>) -> Self {
        self.on_failure = TransformFailurePolicy::Fallback(value.into());
        self
    }

    pub fn with_on_failure(mut self, policy: TransformFailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}
