use std::sync::Arc;

use client::{CatalogApi, QuizApi, StartResponse};
use quiz_core::model::{
    DESIRED_COUNT_OPTIONS, Difficulty, NavCategory, QuizId, QuizLaunch, StartQuizRequest,
    StartTarget, TitleDetail, TitlePath, TopicId, default_question_count,
    format_estimated_minutes, question_count_options, selection_percent,
};

use crate::error::CatalogError;

//
// ─── PICKER STATE ──────────────────────────────────────────────────────────────
//

/// Difficulty and question-count choice for one title or topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSetup {
    total: u32,
    options: Vec<u32>,
    difficulty: Difficulty,
    question_count: Option<u32>,
}

impl QuizSetup {
    #[must_use]
    pub fn new(total_questions: u32) -> Self {
        let options = question_count_options(total_questions, DESIRED_COUNT_OPTIONS);
        let question_count = default_question_count(&options, total_questions);
        Self {
            total: total_questions,
            options,
            difficulty: Difficulty::default(),
            question_count,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn count_options(&self) -> &[u32] {
        &self.options
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn question_count(&self) -> Option<u32> {
        self.question_count
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// # Errors
    ///
    /// Returns `CatalogError::CountNotOffered` for a value outside the picker.
    pub fn select_count(&mut self, count: u32) -> Result<(), CatalogError> {
        if !self.options.contains(&count) {
            return Err(CatalogError::CountNotOffered { count });
        }
        self.question_count = Some(count);
        Ok(())
    }

    /// Estimated duration in minutes, one decimal.
    #[must_use]
    pub fn estimated_minutes(&self) -> String {
        format_estimated_minutes(self.question_count.unwrap_or(0))
    }

    /// Selected count as a share of the total.
    #[must_use]
    pub fn selection_percent(&self) -> u32 {
        selection_percent(self.question_count.unwrap_or(0), self.total)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::NoQuestions` when there is nothing to pick.
    pub fn request(&self) -> Result<StartQuizRequest, CatalogError> {
        let count = self.question_count.ok_or(CatalogError::NoQuestions)?;
        Ok(StartQuizRequest::new(self.difficulty, count)?)
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Catalog browsing and quiz start requests.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogApi>,
    quizzes: Arc<dyn QuizApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogApi>, quizzes: Arc<dyn QuizApi>) -> Self {
        Self { catalog, quizzes }
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Api` when the tree cannot be fetched.
    pub async fn navigation(&self) -> Result<Vec<NavCategory>, CatalogError> {
        Ok(self.catalog.navigation().await?)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Api` when the title cannot be fetched.
    pub async fn title_detail(&self, path: &TitlePath) -> Result<TitleDetail, CatalogError> {
        Ok(self.catalog.title_detail(path).await?)
    }

    /// Start a quiz and resolve its launch payload, following one redirect.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Api` when the start request or the redirect fetch fails.
    pub async fn start(
        &self,
        target: &StartTarget,
        request: Option<StartQuizRequest>,
    ) -> Result<QuizLaunch, CatalogError> {
        tracing::info!("starting quiz {:?} with {:?}", target, request);
        let launch = match self.quizzes.start_quiz(target, request).await? {
            StartResponse::Launch(launch) => launch,
            StartResponse::Redirect(location) => {
                tracing::debug!("start redirected to {}", location);
                self.quizzes.load_launch(&location).await?
            }
        };
        Ok(launch)
    }

    /// # Errors
    ///
    /// See `start`; also fails when the setup has nothing to pick.
    pub async fn start_title(
        &self,
        quiz_id: QuizId,
        setup: &QuizSetup,
    ) -> Result<QuizLaunch, CatalogError> {
        let request = setup.request()?;
        self.start(&StartTarget::Title(quiz_id), Some(request)).await
    }

    /// # Errors
    ///
    /// See `start`; also fails when the setup has nothing to pick.
    pub async fn start_topic(
        &self,
        topic_id: TopicId,
        setup: &QuizSetup,
    ) -> Result<QuizLaunch, CatalogError> {
        let request = setup.request()?;
        self.start(&StartTarget::Topic(topic_id), Some(request)).await
    }

    /// Mixed difficulty, every question up to the server cap.
    ///
    /// # Errors
    ///
    /// See `start`.
    pub async fn start_topic_quick(&self, topic_id: TopicId) -> Result<QuizLaunch, CatalogError> {
        self.start(&StartTarget::TopicQuick(topic_id), None).await
    }
}
