use quiz_core::model::QuizResults;
use quiz_core::text::LanguageFilter;

use super::time_fmt::{format_datetime, format_duration};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongAnswerVm {
    pub number: usize,
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_line: String,
    pub percentage: u32,
    pub completed_at: String,
    pub duration: String,
    pub wrong_answers: Vec<WrongAnswerVm>,
}

/// Wrong-answer texts go through the same display filter as the questions.
#[must_use]
pub fn map_results(results: &QuizResults, filter: LanguageFilter) -> ResultsVm {
    ResultsVm {
        score_line: format!("{} / {}", results.correct_answers, results.total_questions),
        percentage: results.percentage,
        completed_at: format_datetime(results.completed_at),
        duration: format_duration(results.started_at, results.completed_at),
        wrong_answers: results
            .wrong_answers
            .iter()
            .map(|wrong| WrongAnswerVm {
                number: wrong.question_index + 1,
                question: filter.filter(&wrong.question),
                selected: filter.filter(&wrong.selected_answer),
                correct: filter.filter(&wrong.correct_answer),
                explanation: wrong
                    .explanation
                    .as_deref()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_owned),
            })
            .collect(),
    }
}
