//! Session domain entities

use crate::core::question::QuestionSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a session (Value Object)
///
/// Opaque to the domain; the store decides how fresh identifiers are minted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A user's answer to one question and the value derived from it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPair {
    /// Free text supplied by the user
    pub primary: String,
    /// Derived from `primary` by the answer transformer
    pub transformed: String,
}

impl AnswerPair {
    pub fn new(primary: impl Into<String>, transformed: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            transformed: transformed.into(),
        }
    }

    /// Both fields empty, as seeded on session creation
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.transformed.is_empty()
    }
}

/// Question text → answer pair for one session
///
/// Serializes as a flat JSON object keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QASet {
    pairs: BTreeMap<String, AnswerPair>,
}

impl QASet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty pair per question
    pub fn seeded(questions: &QuestionSet) -> Self {
        questions
            .iter()
            .map(|q| (q.to_string(), AnswerPair::empty()))
            .collect()
    }

    pub fn insert(&mut self, question: impl Into<String>, pair: AnswerPair) -> Option<AnswerPair> {
        self.pairs.insert(question.into(), pair)
    }

    pub fn get(&self, question: &str) -> Option<&AnswerPair> {
        self.pairs.get(question)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerPair)> {
        self.pairs.iter()
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, AnswerPair)> for QASet {
    fn from_iter<T: IntoIterator<Item = (String, AnswerPair)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for QASet {
    type Item = (String, AnswerPair);
    type IntoIter = std::collections::btree_map::IntoIter<String, AnswerPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// A session held by the store (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: SessionId,
    pub qa_set: QASet,
}

impl SessionData {
    pub fn new(session_id: SessionId, qa_set: QASet) -> Self {
        Self { session_id, qa_set }
    }

    /// A session whose answers are all empty
    pub fn seeded(session_id: SessionId, questions: &QuestionSet) -> Self {
        Self::new(session_id, QASet::seeded(questions))
    }
}
