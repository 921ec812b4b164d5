//! Question configuration from TOML (`[questions]` section)

use super::{ConfigIssue, Severity};
use qa_domain::{DEFAULT_QUESTIONS, QuestionSet};
use serde::{Deserialize, Serialize};

/// Raw question configuration from TOML
///
/// # Example
///
/// ```toml
/// [questions]
/// defaults = ["What is your name?", "Where do you live?"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// Questions every new session is seeded with
    pub defaults: Vec<String>,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        Self {
            defaults: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl FileQuestionsConfig {
    /// Build the question set, falling back to the built-in questions when
    /// the configured list has no usable entry.
    pub fn to_question_set(&self) -> (QuestionSet, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let Some(set) = QuestionSet::try_new(self.defaults.iter().cloned()) else {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "questions.defaults".to_string(),
                message: "questions.defaults has no usable question, falling back to built-in questions"
                    .to_string(),
            });
            return (QuestionSet::default(), issues);
        };

        if set.len() != self.defaults.len() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "questions.defaults".to_string(),
                message: format!(
                    "questions.defaults: dropped {} blank or duplicate entries",
                    self.defaults.len() - set.len()
                ),
            });
        }

        (set, issues)
    }
}
