//! Question set value object

use serde::{Deserialize, Serialize};

/// Questions every new session starts with when nothing else is configured.
pub const DEFAULT_QUESTIONS: [&str; 3] = [
    "What is your name?",
    "What is your favorite color?",
    "What is the capital of France?",
];

/// The ordered list of questions a new session is seeded with (Value Object)
///
/// Question text doubles as the key in a session's [`QASet`](crate::QASet),
/// so entries are unique and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct QuestionSet {
    questions: Vec<String>,
}

impl QuestionSet {
    /// Try to build a question set, returning None if nothing usable remains
    ///
    /// Blank entries are skipped and duplicates keep their first position.
    pub fn try_new<I, S>(questions: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for question in questions {
            let question: String = question.into();
            let question = question.trim().to_string();
            if question.is_empty() || unique.contains(&question) {
                continue;
            }
            unique.push(question);
        }

        if unique.is_empty() {
            None
        } else {
            Some(Self { questions: unique })
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

}

impl Default for QuestionSet {
    fn default() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for QuestionSet {
    type Error = String;

    fn try_from(questions: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_new(questions).ok_or_else(|| "question set must not be empty".to_string())
    }
}

impl From<QuestionSet> for Vec<String> {
    fn from(set: QuestionSet) -> Self {
        set.questions
    }
}
