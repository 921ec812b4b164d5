//! Test doubles for the use case tests.

use crate::ports::answer_transformer::{AnswerTransformer, TransformError};
use crate::ports::session_event_logger::{SessionEvent, SessionEventLogger};
use async_trait::async_trait;
use qa_domain::{DomainError, QASet, QuestionSet, SessionData, SessionId, SessionRepository};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Prefixes every answer with `t:`.
pub struct PrefixTransformer;

#[async_trait]
impl AnswerTransformer for PrefixTransformer {
    fn name(&self) -> &str {
        "prefix"
    }

    async fn transform(&self, primary: &str) -> Result<String, TransformError> {
        Ok(format!("t:{}", primary))
    }
}

/// Like [`PrefixTransformer`] but fails for one specific input.
pub struct FailingTransformer {
    bad_input: String,
    pub calls: AtomicUsize,
}

impl FailingTransformer {
    pub fn on(bad_input: &str) -> Self {
        Self {
            bad_input: bad_input.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AnswerTransformer for FailingTransformer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn transform(&self, primary: &str) -> Result<String, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if primary == self.bad_input {
            Err(TransformError::Failed(primary.to_string()))
        } else {
            Ok(format!("t:{}", primary))
        }
    }
}

/// Sleeps before answering.
pub struct SlowTransformer(pub Duration);

#[async_trait]
impl AnswerTransformer for SlowTransformer {
    fn name(&self) -> &str {
        "slow"
    }

    async fn transform(&self, primary: &str) -> Result<String, TransformError> {
        tokio::time::sleep(self.0).await;
        Ok(primary.to_string())
    }
}

/// HashMap-backed repository with sequential ids (`session-1`, `session-2`, ...).
#[derive(Default)]
pub struct MemoryRepository {
    sessions: Mutex<HashMap<SessionId, SessionData>>,
    next_id: AtomicUsize,
    questions: QuestionSet,
}

#[async_trait]
impl SessionRepository for MemoryRepository {
    async fn create(&self) -> SessionData {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let session = SessionData::seeded(SessionId::new(format!("session-{}", n)), &self.questions);
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id.clone(), session.clone());
        session
    }

    async fn get_or_create(&self, id: &SessionId) -> SessionData {
        let existing = self.sessions.lock().unwrap().get(id).cloned();
        match existing {
            Some(session) => session,
            None => self.create().await,
        }
    }

    async fn replace(&self, id: &SessionId, qa_set: QASet) -> Result<SessionData, DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| DomainError::SessionNotFound(id.clone()))?;
        session.qa_set = qa_set;
        Ok(session.clone())
    }

    async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.lock().unwrap().contains_key(id)
    }

    async fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

/// Collects events in memory.
#[derive(Default)]
pub struct RecordingLogger {
    pub events: Mutex<Vec<SessionEvent>>,
}

impl RecordingLogger {
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(SessionEvent::kind).collect()
    }
}

impl SessionEventLogger for RecordingLogger {
    fn log(&self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
