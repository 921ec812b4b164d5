//! Answer transformation for a submission.
//!
//! Runs the [`AnswerTransformer`] over every submitted primary answer and
//! assembles the resulting [`QASet`]. Transforms for one submission run
//! concurrently; none of them holds a store lock.

use crate::config::{TransformFailurePolicy, TransformParams};
use crate::ports::answer_transformer::{AnswerTransformer, TransformError};
use futures::future::join_all;
use qa_domain::{AnswerPair, QASet};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A transform failure that the active policy does not absorb.
#[derive(Debug)]
pub(crate) struct FailedAnswer {
    pub question: String,
    pub error: TransformError,
}

/// Transform every answer, applying the failure policy per pair.
pub(crate) async fn transform_answers(
    transformer: &dyn AnswerTransformer,
    params: &TransformParams,
    answers: BTreeMap<String, String>,
) -> Result<QASet, FailedAnswer> {
    let pending = answers
        .values()
        .map(|primary| transform_one(transformer, params, primary));
    let results = join_all(pending).await;

    let mut qa_set = QASet::new();
    for ((question, primary), result) in answers.into_iter().zip(results) {
        let transformed = match result {
            Ok(text) => text,
            Err(error) => match &params.on_failure {
                TransformFailurePolicy::FailRequest => {
                    return Err(FailedAnswer { question, error });
                }
                TransformFailurePolicy::Fallback(value) => {
                    warn!(
                        "Transformer '{}' failed for '{}', using fallback: {}",
                        transformer.name(),
                        question,
                        error
                    );
                    value.clone()
                }
            },
        };
        qa_set.insert(question, AnswerPair::new(primary, transformed));
    }

    debug!(
        "Transformed {} answers with '{}'",
        qa_set.len(),
        transformer.name()
    );
    Ok(qa_set)
}

async fn transform_one(
    transformer: &dyn AnswerTransformer,
    params: &TransformParams,
    primary: &str,
) -> Result<String, TransformError> {
    match params.timeout {
        Some(limit) => tokio::time::timeout(limit, transformer.transform(primary))
            .await
            .map_err(|_| TransformError::Timeout(limit))?,
        None => transformer.transform(primary).await,
    }
}
