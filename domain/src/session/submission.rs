//! Answer submission input
//!
//! [`AnswerSubmission`] is what a client sends to have its answers
//! transformed. It is read from the same wire shape as
//! [`SessionData`](super::entities::SessionData), but only keeps the
//! `primary` text of each pair: a client-supplied `transformed` value is
//! accepted on the wire and dropped here.

use super::entities::{SessionData, SessionId};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Primary answers submitted for one session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSubmission")]
pub struct AnswerSubmission {
    pub session_id: SessionId,
    /// Question text → primary answer
    pub answers: BTreeMap<String, String>,
}

impl AnswerSubmission {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            answers: BTreeMap::new(),
        }
    }

    pub fn with_answer(mut self, question: impl Into<String>, primary: impl Into<String>) -> Self {
        self.answers.insert(question.into(), primary.into());
        self
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<SessionData> for AnswerSubmission {
    fn from(session: SessionData) -> Self {
        Self {
            session_id: session.session_id,
            answers: session
                .qa_set
                .into_iter()
                .map(|(question, pair)| (question, pair.primary))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct RawSubmission {
    session_id: SessionId,
    qa_set: RawQaSet,
}

/// Older clients wrapped the pairs in a second `qa_set` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQaSet {
    Flat(BTreeMap<String, RawAnswer>),
    Nested { qa_set: BTreeMap<String, RawAnswer> },
}

#[derive(Deserialize)]
struct RawAnswer {
    primary: String,
}

impl From<RawSubmission> for AnswerSubmission {
    fn from(raw: RawSubmission) -> Self {
        let pairs = match raw.qa_set {
            RawQaSet::Flat(pairs) | RawQaSet::Nested { qa_set: pairs } => pairs,
        };
        Self {
            session_id: raw.session_id,
            answers: pairs
                .into_iter()
                .map(|(question, answer)| (question, answer.primary))
                .collect(),
        }
    }
}
