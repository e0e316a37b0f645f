use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Difficulty, QuestionRecord, QuizId, TopicId};

/// Seconds budgeted per question by the time estimator.
pub const SECONDS_PER_QUESTION: u32 = 10;

/// Number of picker values aimed for between 1 and the total.
pub const DESIRED_COUNT_OPTIONS: usize = 10;

/// Cap the server applies to quick topic quizzes.
pub const QUICK_QUIZ_MAX_QUESTIONS: u32 = 50;

//
// ─── NAVIGATION TREE ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavTitle {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSubCategory {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub titles: Vec<NavTitle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavCategory {
    pub name: String,
    pub url: String,
    #[serde(default, alias = "sub_categories")]
    pub sub_categories: Vec<NavSubCategory>,
}

//
// ─── TITLES / TOPICS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub id: TopicId,
    pub name: String,
    #[serde(default, alias = "total_questions")]
    pub total_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDetail {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "total_questions")]
    pub total_questions: u32,
    #[serde(default, alias = "learning_objectives")]
    pub learning_objectives: Vec<String>,
    #[serde(default, alias = "study_tips")]
    pub study_tips: Vec<String>,
    #[serde(default)]
    pub topics: Vec<TopicSummary>,
}

impl TitleDetail {
    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        QuizId::new(self.name.clone())
    }
}

/// Location of a title inside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitlePath {
    pub category: String,
    pub subcategory: String,
    pub title: String,
}

impl TitlePath {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            title: title.into(),
        }
    }

    /// Parse `/quiz/{category}/{subcategory}/{title}`.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let rest = url.trim().strip_prefix("/quiz/")?;
        let mut parts = rest.trim_end_matches('/').splitn(3, '/');
        let category = parts.next().filter(|s| !s.is_empty())?;
        let subcategory = parts.next().filter(|s| !s.is_empty())?;
        let title = parts.next().filter(|s| !s.is_empty())?;
        Some(Self::new(category, subcategory, title))
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("/quiz/{}/{}/{}", self.category, self.subcategory, self.title)
    }
}

//
// ─── START REQUEST ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StartRequestError {
    #[error("question count must be > 0")]
    ZeroQuestionCount,
}

/// What a start request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartTarget {
    Title(QuizId),
    Topic(TopicId),
    /// Topic quiz with server defaults (mixed, all questions up to the cap).
    TopicQuick(TopicId),
}

impl StartTarget {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            StartTarget::Title(id) => format!("/quiz/start/{id}"),
            StartTarget::Topic(id) => format!("/quiz/start/topic/{id}"),
            StartTarget::TopicQuick(id) => format!("/quiz/start/topic/{id}/quick"),
        }
    }
}

/// Form body of `POST /quiz/start/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizRequest {
    pub difficulty: Difficulty,
    pub question_count: u32,
}

impl StartQuizRequest {
    /// # Errors
    ///
    /// Returns `StartRequestError::ZeroQuestionCount` when `question_count` is zero.
    pub fn new(difficulty: Difficulty, question_count: u32) -> Result<Self, StartRequestError> {
        if question_count == 0 {
            return Err(StartRequestError::ZeroQuestionCount);
        }
        Ok(Self {
            difficulty,
            question_count,
        })
    }
}

//
// ─── LAUNCH PAYLOAD ────────────────────────────────────────────────────────────
//

/// Contextual identifiers used only for the post-completion redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizContext {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl QuizContext {
    #[must_use]
    pub fn for_title(path: &TitlePath) -> Self {
        Self {
            category: Some(path.category.clone()),
            subcategory: Some(path.subcategory.clone()),
            title: Some(path.title.clone()),
        }
    }

    /// The title page when every part is known, otherwise the landing page.
    #[must_use]
    pub fn redirect_path(&self) -> String {
        let part = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        match (part(&self.category), part(&self.subcategory), part(&self.title)) {
            (Some(category), Some(subcategory), Some(title)) => {
                TitlePath::new(category, subcategory, title).url()
            }
            _ => "/".to_string(),
        }
    }
}

/// Everything the quiz page needs at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizLaunch {
    #[serde(default)]
    pub questions: Option<Vec<QuestionRecord>>,
    #[serde(default)]
    pub context: QuizContext,
    #[serde(default)]
    pub time_budget_seconds: Option<u32>,
    #[serde(default)]
    pub quiz_title: Option<String>,
}

//
// ─── PICKER MATH ───────────────────────────────────────────────────────────────
//

/// Question-count picker values for a title or topic with `total` questions.
///
/// Always contains 1 and `total`, with up to `desired` evenly spaced values,
/// sorted and without duplicates.
#[must_use]
pub fn question_count_options(total: u32, desired: usize) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    if total == 1 {
        return vec![1];
    }
    let points = desired.max(2);
    let span = f64::from(total - 1);
    let steps = (points - 1) as f64;
    let mut options: Vec<u32> = (0..points)
        .map(|i| {
            let value = 1.0 + span * (i as f64) / steps;
            // Bounded by `total`, so the cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = value.round() as u32;
            rounded.clamp(1, total)
        })
        .collect();
    options.sort_unstable();
    options.dedup();
    options
}

/// Default picker value: the total when offered, otherwise the largest option.
#[must_use]
pub fn default_question_count(options: &[u32], total: u32) -> Option<u32> {
    if options.contains(&total) {
        Some(total)
    } else {
        options.last().copied()
    }
}

/// Estimated minutes for `questions` questions, rounded to one decimal.
#[must_use]
pub fn estimated_minutes(questions: u32) -> f64 {
    let seconds = u64::from(questions) * u64::from(SECONDS_PER_QUESTION);
    let minutes = seconds as f64 / 60.0;
    (minutes * 10.0).round() / 10.0
}

#[must_use]
pub fn format_estimated_minutes(questions: u32) -> String {
    format!("{:.1}", estimated_minutes(questions))
}

/// Share of `max` represented by `selected`, as a rounded percentage.
#[must_use]
pub fn selection_percent(selected: u32, max: u32) -> u32 {
    if max == 0 {
        return 100;
    }
    let scaled = (200 * u64::from(selected) + u64::from(max)) / (2 * u64::from(max));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
