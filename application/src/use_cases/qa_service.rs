//! QA service use case.
//!
//! [`QaService`] is the API surface of the system. It orchestrates the
//! [`SessionRepository`] and the [`AnswerTransformer`] for three operations:
//!
//! | Operation | Store call | Failure |
//! |-----------|------------|---------|
//! | [`create_session`](QaService::create_session) | `create` | never |
//! | [`fetch_session`](QaService::fetch_session) | `get_or_create` | never (unknown ids get a new session) |
//! | [`submit_answers`](QaService::submit_answers) | `replace` | unknown id, transform failure |
//!
//! Fetch and submit deliberately treat unknown ids differently: fetch
//! silently creates a new session under a fresh id, submit refuses.

use super::submit_answers::transform_answers;
use crate::config::TransformParams;
use crate::ports::answer_transformer::{AnswerTransformer, TransformError};
use crate::ports::session_event_logger::{
    NoSessionEventLogger, RejectionReason, SessionEvent, SessionEventLogger,
};
use qa_domain::{AnswerSubmission, DomainError, SessionData, SessionId, SessionRepository};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors reported by [`QaService::submit_answers`].
#[derive(Error, Debug)]
pub enum QaServiceError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Transformation failed for '{question}': {source}")]
    TransformFailure {
        question: String,
        #[source]
        source: TransformError,
    },
}

impl From<DomainError> for QaServiceError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::SessionNotFound(id) => QaServiceError::NotFound(id),
        }
    }
}

/// Session lifecycle and answer submission.
///
/// Cheap to clone; all collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct QaService {
    repository: Arc<dyn SessionRepository>,
    transformer: Arc<dyn AnswerTransformer>,
    params: TransformParams,
    event_logger: Arc<dyn SessionEventLogger>,
}

impl QaService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        transformer: Arc<dyn AnswerTransformer>,
    ) -> Self {
        Self {
            repository,
            transformer,
            params: TransformParams::default(),
            event_logger: Arc::new(NoSessionEventLogger),
        }
    }

    pub fn with_params(mut self, params: TransformParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a session event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn SessionEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Create a new session seeded with the default questions.
    pub async fn create_session(&self) -> SessionData {
        let session = self.repository.create().await;
        info!("Created session {}", session.session_id);
        self.event_logger.log(SessionEvent::SessionCreated {
            session_id: session.session_id.clone(),
        });
        session
    }

    /// Fetch a session, creating a new one if `session_id` is unknown.
    ///
    /// The returned session carries a different id when a substitution
    /// happened.
    pub async fn fetch_session(&self, session_id: &SessionId) -> SessionData {
        let session = self.repository.get_or_create(session_id).await;
        if session.session_id != *session_id {
            info!(
                "Unknown session {} requested, created {} instead",
                session_id, session.session_id
            );
            self.event_logger.log(SessionEvent::SessionSubstituted {
                session_id: session.session_id.clone(),
                requested: session_id.clone(),
            });
        } else {
            debug!("Fetched session {}", session_id);
        }
        session
    }

    /// Transform and persist submitted answers for an existing session.
    ///
    /// Replaces the session's whole answer set with the submitted questions.
    /// On any error the stored session is left untouched.
    pub async fn submit_answers(
        &self,
        submission: AnswerSubmission,
    ) -> Result<SessionData, QaServiceError> {
        let AnswerSubmission {
            session_id,
            answers,
        } = submission;

        if !self.repository.contains(&session_id).await {
            warn!("Submission for unknown session {}", session_id);
            self.log_rejection(&session_id, RejectionReason::NotFound);
            return Err(QaServiceError::NotFound(session_id));
        }

        debug!(
            "Transforming {} answers for session {}",
            answers.len(),
            session_id
        );
        let qa_set = match transform_answers(self.transformer.as_ref(), &self.params, answers).await
        {
            Ok(qa_set) => qa_set,
            Err(failed) => {
                warn!(
                    "Submission for session {} failed on '{}': {}",
                    session_id, failed.question, failed.error
                );
                self.log_rejection(&session_id, RejectionReason::TransformFailure);
                return Err(QaServiceError::TransformFailure {
                    question: failed.question,
                    source: failed.error,
                });
            }
        };

        let answer_count = qa_set.len();
        let session = self.repository.replace(&session_id, qa_set).await?;
        info!(
            "Stored {} transformed answers for session {}",
            answer_count, session_id
        );
        self.event_logger.log(SessionEvent::AnswersSubmitted {
            session_id,
            answers: answer_count,
        });
        Ok(session)
    }

    /// Number of sessions currently held by the store.
    pub async fn session_count(&self) -> usize {
        self.repository.count().await
    }

    fn log_rejection(&self, session_id: &SessionId, reason: RejectionReason) {
        self.event_logger.log(SessionEvent::SubmissionRejected {
            session_id: session_id.clone(),
            reason,
        });
    }
}
