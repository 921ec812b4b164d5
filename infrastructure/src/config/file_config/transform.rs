//! Transform configuration from TOML (`[transform]` section)

use super::{ConfigIssue, Severity};
use crate::transform::PLACEHOLDER_PREFIX;
use qa_application::{TransformFailurePolicy, TransformParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw answer transformation configuration from TOML
///
/// # Example
///
/// ```toml
/// [transform]
/// timeout_secs = 30              # 0 disables the timeout
/// on_failure = "fail"            # "fail" or "fallback"
/// fallback_value = ""
/// placeholder_prefix = "result from llm transform call with data "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTransformConfig {
    /// Per-answer timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
    /// Failure policy: "fail" or "fallback"
    pub on_failure: String,
    /// Stored as the transformed value under the "fallback" policy
    pub fallback_value: String,
    /// Prefix used by the placeholder transformer
    pub placeholder_prefix: String,
}

impl Default for FileTransformConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            on_failure: "fail".to_string(),
            fallback_value: String::new(),
            placeholder_prefix: PLACEHOLDER_PREFIX.to_string(),
        }
    }
}

impl FileTransformConfig {
    /// Convert to [`TransformParams`], returning warnings for unknown values.
    pub fn to_transform_params(&self) -> (TransformParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let timeout = match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let on_failure = match self.on_failure.to_lowercase().as_str() {
            "fail" => TransformFailurePolicy::FailRequest,
            "fallback" => TransformFailurePolicy::Fallback(self.fallback_value.clone()),
            _ => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    field: "transform.on_failure".to_string(),
                    message: format!(
                        "transform.on_failure: unknown value '{}', falling back to 'fail'",
                        self.on_failure
                    ),
                });
                TransformFailurePolicy::FailRequest
            }
        };

        (
            TransformParams::default()
                .with_timeout(timeout)
                .with_on_failure(on_failure),
            issues,
        )
    }
}
