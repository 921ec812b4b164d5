//! Session repository trait

use super::entities::{QASet, SessionData, SessionId};
use crate::core::error::DomainError;
use async_trait::async_trait;

/// Repository trait for question-answer sessions
///
/// This is a domain-level abstraction over the authoritative session store.
/// Implementations live in the infrastructure layer and are shared across
/// all in-flight requests, so every method takes `&self`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a session with a fresh identifier and empty answers
    async fn create(&self) -> SessionData;

    /// Return the stored session, or create a new one when `id` is unknown
    ///
    /// A newly created session gets a freshly generated identifier; the
    /// requested `id` is never reused. Callers detect the substitution by
    /// comparing the returned `session_id` with the one they asked for.
    async fn get_or_create(&self, id: &SessionId) -> SessionData;

    /// Overwrite the answers of an existing session
    async fn replace(&self, id: &SessionId, qa_set: QASet) -> Result<SessionData, DomainError>;

    /// Check whether a session exists
    async fn contains(&self, id: &SessionId) -> bool;

    /// Number of stored sessions
    async fn count(&self) -> usize;
}
