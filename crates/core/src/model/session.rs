use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::countdown::Countdown;
use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for this quiz")]
    Empty,

    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("option {index} is outside {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("session already completed")]
    Completed,
}

/// A recorded incorrect answer, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrongAnswer {
    pub question_index: usize,
    pub selected_index: usize,
    pub correct_index: usize,
}

/// Outcome of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// In-memory state of one attempt at a fixed, ordered question set.
///
/// The record enforces the data-level invariants (write-once answers, forward-only
/// index, single completion). Phase handling lives in the controller.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected_answers: BTreeMap<usize, usize>,
    correct_count: usize,
    wrong_answers: Vec<WrongAnswer>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    countdown: Option<Countdown>,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when `questions` is empty.
    pub fn new(
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
        countdown: Option<Countdown>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            questions,
            current_index: 0,
            selected_answers: BTreeMap::new(),
            correct_count: 0,
            wrong_answers: Vec::new(),
            started_at,
            completed_at: None,
            countdown,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn selected_answer(&self, question_index: usize) -> Option<usize> {
        self.selected_answers.get(&question_index).copied()
    }

    #[must_use]
    pub fn is_answered(&self, question_index: usize) -> bool {
        self.selected_answers.contains_key(&question_index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selected_answers.len()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_answers(&self) -> &[WrongAnswer] {
        &self.wrong_answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn countdown_mut(&mut self) -> Option<&mut Countdown> {
        self.countdown.as_mut()
    }

    #[must_use]
    pub fn time_budget_seconds(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::budget_seconds)
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::remaining_seconds)
    }

    /// Record the answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after completion,
    /// `SessionError::AlreadyAnswered` when the current index already has a record,
    /// `SessionError::OptionOutOfRange` for an invalid option index.
    pub fn record_answer(&mut self, selected_index: usize) -> Result<AnswerRecord, SessionError> {
        if self.is_completed() {
            return Err(SessionError::Completed);
        }
        let question_index = self.current_index;
        if self.is_answered(question_index) {
            return Err(SessionError::AlreadyAnswered {
                index: question_index,
            });
        }
        let question = self
            .questions
            .get(question_index)
            .ok_or(SessionError::Completed)?;
        let len = question.option_count();
        if selected_index >= len {
            return Err(SessionError::OptionOutOfRange {
                index: selected_index,
                len,
            });
        }

        let correct_index = question.correct_index();
        let is_correct = question.is_correct(selected_index);
        self.selected_answers.insert(question_index, selected_index);
        if is_correct {
            self.correct_count += 1;
        } else {
            self.wrong_answers.push(WrongAnswer {
                question_index,
                selected_index,
                correct_index,
            });
        }

        Ok(AnswerRecord {
            question_index,
            selected_index,
            correct_index,
            is_correct,
        })
    }

    /// Move to the next question. Returns `false` on the last question.
    pub fn advance(&mut self) -> bool {
        if self.is_completed() || self.is_last_question() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Mark the session complete and build the results.
    ///
    /// A `completed_at` earlier than the start (wall clock stepped back) is
    /// clamped to the start time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` on a second call.
    pub fn complete(&mut self, completed_at: DateTime<Utc>) -> Result<QuizResults, SessionError> {
        if self.is_completed() {
            return Err(SessionError::Completed);
        }
        let completed_at = completed_at.max(self.started_at);
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.stop();
        }
        self.completed_at = Some(completed_at);
        Ok(self.build_results(completed_at))
    }

    fn build_results(&self, completed_at: DateTime<Utc>) -> QuizResults {
        let wrong_answers = self
            .wrong_answers
            .iter()
            .filter_map(|wrong| {
                let question = self.questions.get(wrong.question_index)?;
                Some(WrongAnswerDetail {
                    question_index: wrong.question_index,
                    question: question.prompt().to_owned(),
                    selected_index: wrong.selected_index,
                    selected_answer: question
                        .option(wrong.selected_index)
                        .unwrap_or_default()
                        .to_owned(),
                    correct_index: wrong.correct_index,
                    correct_answer: question.correct_option().to_owned(),
                    explanation: question.explanation().map(str::to_owned),
                })
            })
            .collect();

        QuizResults {
            total_questions: self.questions.len(),
            correct_answers: self.correct_count,
            percentage: score_percentage(self.correct_count, self.questions.len()),
            wrong_answers,
            started_at: self.started_at,
            completed_at,
        }
    }
}

/// Wrong answer with the texts needed by the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswerDetail {
    pub question_index: usize,
    pub question: String,
    pub selected_index: usize,
    pub selected_answer: String,
    pub correct_index: usize,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// Final evaluation of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub percentage: u32,
    pub wrong_answers: Vec<WrongAnswerDetail>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// `round(100 * correct / total)` with halves rounded up; 0 for an empty set.
#[must_use]
pub fn score_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = (200 * correct as u64 + total as u64) / (2 * total as u64);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
