use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSettings {
    pub job_role: String,
    pub experience: String,
    pub interview_type: String,
    pub difficulty: String,
    pub duration: String,
}

impl InterviewSettings {
    pub fn new(
        job_role: impl Into<String>,
        experience: impl Into<String>,
        interview_type: impl Into<String>,
        difficulty: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            job_role: job_role.into(),
            experience: experience.into(),
            interview_type: interview_type.into(),
            difficulty: difficulty.into(),
            duration: duration.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Behavioral,
    Technical,
    Situational,
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionCategory::Behavioral => write!(f, "Behavioral"),
            QuestionCategory::Technical => write!(f, "Technical"),
            QuestionCategory::Situational => write!(f, "Situational"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub category: QuestionCategory,
}

impl Question {
    pub fn new(text: impl Into<String>, category: QuestionCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn behavioral(text: impl Into<String>) -> Self {
        Self::new(text, QuestionCategory::Behavioral)
    }

    pub fn technical(text: impl Into<String>) -> Self {
        Self::new(text, QuestionCategory::Technical)
    }

    pub fn situational(text: impl Into<String>) -> Self {
        Self::new(text, QuestionCategory::Situational)
    }
}

/// Answers keyed by 0-based question index. Gaps are allowed; a skipped
/// question simply has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<usize, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, text: impl Into<String>) {
        self.answers.insert(index, text.into());
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers.iter().map(|(i, text)| (*i, text.as_str()))
    }
}

/// Opaque handle to a finished recording. The flow never looks inside the
/// bytes; diagnostics reference the id and size only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMedia {
    pub id: Uuid,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl RecordedMedia {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
