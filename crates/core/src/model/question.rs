use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("question has no correct answer index")]
    MissingCorrectIndex,

    #[error("correct answer index {index} is outside {len} options")]
    CorrectIndexOutOfRange { index: i64, len: usize },
}

//
// ─── WIRE RECORD ───────────────────────────────────────────────────────────────
//

/// Question exactly as the server ships it inside a launch payload.
///
/// Nothing is validated here; `Question::try_from` does that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "question", default)]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(
        rename = "correct_answer",
        alias = "correctAnswer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub correct_answer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(
        rename = "topic_name",
        alias = "topicName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub topic_name: Option<String>,
    #[serde(
        rename = "topic_id",
        alias = "topicId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub topic_id: Option<String>,
}

impl QuestionRecord {
    /// Convenience constructor used by fixtures and tests.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: i64::try_from(correct_answer).ok(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic_id: impl Into<String>, topic_name: impl Into<String>) -> Self {
        self.topic_id = Some(topic_id.into());
        self.topic_name = Some(topic_name.into());
        self
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: Option<String>,
    difficulty: Option<String>,
    topic_name: Option<String>,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Explanation text, ignoring blank values.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    #[must_use]
    pub fn topic_name(&self) -> Option<&str> {
        self.topic_name.as_deref()
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let len = record.options.len();
        if len < 2 {
            return Err(QuestionError::TooFewOptions { len });
        }
        let raw = record.correct_answer.ok_or(QuestionError::MissingCorrectIndex)?;
        let correct_index = usize::try_from(raw)
            .ok()
            .filter(|index| *index < len)
            .ok_or(QuestionError::CorrectIndexOutOfRange { index: raw, len })?;

        Ok(Self {
            prompt: record.prompt,
            options: record.options,
            correct_index,
            explanation: record.explanation,
            difficulty: record.difficulty,
            topic_name: record.topic_name,
        })
    }
}
