//! Port for structured session event logging.
//!
//! Defines the [`SessionEventLogger`] trait for recording session lifecycle
//! events (creation, id substitution, submissions) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL).

use qa_domain::SessionId;
use serde::Serialize;

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    NotFound,
    TransformFailure,
}

/// A session lifecycle event.
///
/// Serializes with an `event` tag, e.g.
/// `{"event":"answers_submitted","session_id":"...","answers":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionCreated {
        session_id: SessionId,
    },
    /// A fetch for an unknown id was answered with a fresh session.
    SessionSubstituted {
        session_id: SessionId,
        requested: SessionId,
    },
    AnswersSubmitted {
        session_id: SessionId,
        answers: usize,
    },
    SubmissionRejected {
        session_id: SessionId,
        reason: RejectionReason,
    },
}

impl SessionEvent {
    /// Snake-case event name, matching the serialized `event` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::SessionCreated { .. } => "session_created",
            SessionEvent::SessionSubstituted { .. } => "session_substituted",
            SessionEvent::AnswersSubmitted { .. } => "answers_submitted",
            SessionEvent::SubmissionRejected { .. } => "submission_rejected",
        }
    }

    /// The session the event is about.
    pub fn session_id(&self) -> &SessionId {
        match self {
            SessionEvent::SessionCreated { session_id }
            | SessionEvent::SessionSubstituted { session_id, .. }
            | SessionEvent::AnswersSubmitted { session_id, .. }
            | SessionEvent::SubmissionRejected { session_id, .. } => session_id,
        }
    }
}

/// Port for logging session events to a structured log.
///
/// `log` is synchronous and infallible: logging failures never surface
/// to the request that produced the event.
pub trait SessionEventLogger: Send + Sync {
    /// Record a session event.
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoSessionEventLogger;

impl SessionEventLogger for NoSessionEventLogger {
    fn log(&self, _event: SessionEvent) {}
}
