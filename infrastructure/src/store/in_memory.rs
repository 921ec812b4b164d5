//! In-memory session store.
//!
//! Sessions live for the lifetime of the process; nothing is evicted.

use async_trait::async_trait;
use qa_domain::{DomainError, QASet, QuestionSet, SessionData, SessionId, SessionRepository};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::{debug, trace};
use uuid::Uuid;

/// Process-lifetime session store keyed by session id.
///
/// One coarse lock guards the map. It is only held for map access, so a
/// slow answer transformer never blocks unrelated sessions.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionData>>,
    questions: QuestionSet,
}

impl InMemorySessionStore {
    /// Create a store whose new sessions are seeded with `questions`.
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            questions,
        }
    }

    fn fresh_id() -> SessionId {
        SessionId::new(Uuid::new_v4().to_string())
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(QuestionSet::default())
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn create(&self) -> SessionData {
        let mut sessions = self.sessions.write().await;
        loop {
            let id = Self::fresh_id();
            if let Entry::Vacant(slot) = sessions.entry(id.clone()) {
                let session = SessionData::seeded(id, &self.questions);
                slot.insert(session.clone());
                debug!(
                    "Stored session {} ({} sessions)",
                    session.session_id,
                    sessions.len()
                );
                return session;
            }
            trace!("Session id {} already taken, drawing another", id);
        }
    }

    async fn get_or_create(&self, id: &SessionId) -> SessionData {
        if let Some(session) = self.sessions.read().await.get(id) {
            return session.clone();
        }
        self.create().await
    }

    async fn replace(&self, id: &SessionId, qa_set: QASet) -> Result<SessionData, DomainError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| DomainError::SessionNotFound(id.clone()))?;
        session.qa_set = qa_set;
        Ok(session.clone())
    }

    async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
