use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::{
    Language, NavCategory, QuizLaunch, QuizResults, StartQuizRequest, StartTarget, TitleDetail,
    TitlePath, TranslationTable,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::memory::InMemoryServer;

/// Errors surfaced by server adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("server responded with status {0}")]
    HttpStatus(u16),

    #[error("redirect without a location")]
    MissingLocation,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("decode error: {0}")]
    Decode(String),
}

//
// ─── WIRE SHAPES ───────────────────────────────────────────────────────────────
//

/// Wrong answer as posted to `/quiz/submit-results`. Answers are option indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedWrongAnswer {
    pub question_index: usize,
    pub question: String,
    pub selected_answer: usize,
    pub correct_answer: usize,
}

/// Body of `POST /quiz/submit-results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSubmission {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub wrong_answers: Vec<SubmittedWrongAnswer>,
    pub completed_at: DateTime<Utc>,
}

impl ResultsSubmission {
    #[must_use]
    pub fn from_results(results: &QuizResults) -> Self {
        Self {
            total_questions: results.total_questions,
            correct_answers: results.correct_answers,
            wrong_answers: results
                .wrong_answers
                .iter()
                .map(|wrong| SubmittedWrongAnswer {
                    question_index: wrong.question_index,
                    question: wrong.question.clone(),
                    selected_answer: wrong.selected_index,
                    correct_answer: wrong.correct_index,
                })
                .collect(),
            completed_at: results.completed_at,
        }
    }
}

/// Acknowledgement body. Callers never depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
}

/// What the server answered to a start request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartResponse {
    /// Follow with `QuizApi::load_launch`.
    Redirect(String),
    Launch(QuizLaunch),
}

impl StartResponse {
    /// Classify a JSON start response body.
    ///
    /// A `redirect` or `redirectUrl` string wins; anything else must be a launch payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body is neither.
    pub fn from_json(body: serde_json::Value) -> Result<Self, ApiError> {
        let redirect = ["redirect", "redirectUrl"].iter().find_map(|key| {
            body.get(*key)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|location| !location.is_empty())
                .map(str::to_owned)
        });
        if let Some(location) = redirect {
            return Ok(StartResponse::Redirect(location));
        }
        serde_json::from_value(body)
            .map(StartResponse::Launch)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Ask the server to assemble a quiz.
    ///
    /// `request` is `None` for the quick topic variant, which sends no body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failures, non-success status or an unreadable body.
    async fn start_quiz(
        &self,
        target: &StartTarget,
        request: Option<StartQuizRequest>,
    ) -> Result<StartResponse, ApiError>;

    /// Fetch the launch payload a start redirect points at.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown locations, or other adapter errors.
    async fn load_launch(&self, location: &str) -> Result<QuizLaunch, ApiError>;

    /// Post the results of a finished session. Single attempt.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects it.
    async fn submit_results(&self, submission: &ResultsSubmission) -> Result<SubmitAck, ApiError>;
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the category → subcategory → title tree.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on adapter failures.
    async fn navigation(&self) -> Result<Vec<NavCategory>, ApiError>;

    /// Fetch one title with its topics.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if missing, or other adapter errors.
    async fn title_detail(&self, path: &TitlePath) -> Result<TitleDetail, ApiError>;
}

#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Fetch the translation table for one language.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on adapter failures.
    async fn fetch_translations(&self, language: Language) -> Result<TranslationTable, ApiError>;
}

/// Server adapters behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Backend {
    pub quizzes: Arc<dyn QuizApi>,
    pub catalog: Arc<dyn CatalogApi>,
    pub translations: Arc<dyn TranslationApi>,
}

impl Backend {
    #[must_use]
    pub fn from_server<S>(server: S) -> Self
    where
        S: QuizApi + CatalogApi + TranslationApi + Clone + 'static,
    {
        Self {
            quizzes: Arc::new(server.clone()),
            catalog: Arc::new(server.clone()),
            translations: Arc::new(server),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_server(InMemoryServer::new())
    }
}
