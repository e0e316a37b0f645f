use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use quiz_core::model::{
    Difficulty, Language, NavCategory, NavSubCategory, NavTitle, QUICK_QUIZ_MAX_QUESTIONS,
    QuestionRecord, QuizContext, QuizLaunch, StartQuizRequest, StartTarget, TitleDetail,
    TitlePath, TopicSummary, TranslationTable,
};
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::api::{
    ApiError, CatalogApi, QuizApi, ResultsSubmission, StartResponse, SubmitAck, TranslationApi,
};

/// One title with its question bank, as loaded from a fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFixture {
    pub category: String,
    pub subcategory: String,
    pub detail: TitleDetail,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// Offline catalog: titles plus translation tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFixture {
    #[serde(default)]
    pub titles: Vec<TitleFixture>,
    #[serde(default)]
    pub translations: HashMap<Language, TranslationTable>,
    /// Applied to every launch the server hands out.
    #[serde(default)]
    pub time_budget_seconds: Option<u32>,
}

impl CatalogFixture {
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when `json` is not a valid fixture.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone)]
struct TitleEntry {
    path: TitlePath,
    detail: TitleDetail,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Default)]
struct Failures {
    catalog: bool,
    start: bool,
    submissions: bool,
    translations: HashSet<Language>,
}

#[derive(Debug, Default)]
struct ServerState {
    titles: Vec<TitleEntry>,
    translations: HashMap<Language, TranslationTable>,
    time_budget_seconds: Option<u32>,
    launches: HashMap<String, QuizLaunch>,
    next_launch: u64,
    submissions: Vec<ResultsSubmission>,
    failures: Failures,
}

/// In-process stand-in for the quiz server, for tests and offline mode.
#[derive(Clone, Default)]
pub struct InMemoryServer {
    state: Arc<Mutex<ServerState>>,
}

impl InMemoryServer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_fixture(fixture: CatalogFixture) -> Self {
        let server = Self::new();
        if let Ok(mut state) = server.state.lock() {
            state.translations = fixture.translations;
            state.time_budget_seconds = fixture.time_budget_seconds;
            state.titles = fixture.titles.into_iter().map(title_entry).collect();
        }
        server
    }

    fn lock(&self) -> Result<MutexGuard<'_, ServerState>, ApiError> {
        self.state
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))
    }

    /// Register a title and its question bank. Totals are derived from the bank.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn add_title(
        &self,
        path: TitlePath,
        detail: TitleDetail,
        questions: Vec<QuestionRecord>,
    ) -> Result<(), ApiError> {
        let entry = title_entry(TitleFixture {
            category: path.category,
            subcategory: path.subcategory,
            detail,
            questions,
        });
        let mut state = self.lock()?;
        state.titles.retain(|existing| existing.path != entry.path);
        state.titles.push(entry);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn set_translations(
        &self,
        language: Language,
        table: TranslationTable,
    ) -> Result<(), ApiError> {
        self.lock()?.translations.insert(language, table);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn set_time_budget(&self, seconds: Option<u32>) -> Result<(), ApiError> {
        self.lock()?.time_budget_seconds = seconds;
        Ok(())
    }

    /// Store a launch payload and return its location.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn publish_launch(&self, launch: QuizLaunch) -> Result<String, ApiError> {
        let mut state = self.lock()?;
        state.next_launch += 1;
        let location = format!("/quiz/play/{}", state.next_launch);
        state.launches.insert(location.clone(), launch);
        Ok(location)
    }

    /// Results posted so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn submissions(&self) -> Result<Vec<ResultsSubmission>, ApiError> {
        Ok(self.lock()?.submissions.clone())
    }

    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn fail_catalog(&self, fail: bool) -> Result<(), ApiError> {
        self.lock()?.failures.catalog = fail;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn fail_start(&self, fail: bool) -> Result<(), ApiError> {
        self.lock()?.failures.start = fail;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn fail_submissions(&self, fail: bool) -> Result<(), ApiError> {
        self.lock()?.failures.submissions = fail;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the state lock is poisoned.
    pub fn fail_translations(&self, language: Language) -> Result<(), ApiError> {
        self.lock()?.failures.translations.insert(language);
        Ok(())
    }
}

fn title_entry(fixture: TitleFixture) -> TitleEntry {
    let TitleFixture {
        category,
        subcategory,
        mut detail,
        questions,
    } = fixture;
    let path = TitlePath::new(category, subcategory, detail.name.clone());
    detail.total_questions = u32::try_from(questions.len()).unwrap_or(u32::MAX);
    for topic in &mut detail.topics {
        let count = questions
            .iter()
            .filter(|q| q.topic_id.as_deref() == Some(topic.id.as_str()))
            .count();
        topic.total_questions = u32::try_from(count).unwrap_or(u32::MAX);
    }
    TitleEntry {
        path,
        detail,
        questions,
    }
}

/// Difficulty-filtered, shuffled subset. Falls back to the whole pool when the
/// filter leaves nothing.
fn select_questions(
    pool: &[QuestionRecord],
    difficulty: Difficulty,
    count: u32,
) -> Vec<QuestionRecord> {
    let mut selected: Vec<QuestionRecord> = pool
        .iter()
        .filter(|q| difficulty.matches_label(q.difficulty.as_deref()))
        .cloned()
        .collect();
    if selected.is_empty() {
        selected = pool.to_vec();
    }
    selected.shuffle(&mut rand::rng());
    selected.truncate(usize::try_from(count).unwrap_or(usize::MAX));
    selected
}

fn build_nav(titles: &[TitleEntry]) -> Vec<NavCategory> {
    let mut nav: Vec<NavCategory> = Vec::new();
    for entry in titles {
        let path = &entry.path;
        let category_idx = match nav.iter().position(|c| c.name == path.category) {
            Some(idx) => idx,
            None => {
                nav.push(NavCategory {
                    name: path.category.clone(),
                    url: format!("/quiz/{}", path.category),
                    sub_categories: Vec::new(),
                });
                nav.len() - 1
            }
        };
        let subs = &mut nav[category_idx].sub_categories;
        let sub_idx = match subs.iter().position(|s| s.name == path.subcategory) {
            Some(idx) => idx,
            None => {
                subs.push(NavSubCategory {
                    name: path.subcategory.clone(),
                    url: format!("/quiz/{}/{}", path.category, path.subcategory),
                    titles: Vec::new(),
                });
                subs.len() - 1
            }
        };
        subs[sub_idx].titles.push(NavTitle {
            name: path.title.clone(),
            url: path.url(),
        });
    }
    nav
}

#[async_trait]
impl QuizApi for InMemoryServer {
    async fn start_quiz(
        &self,
        target: &StartTarget,
        request: Option<StartQuizRequest>,
    ) -> Result<StartResponse, ApiError> {
        let launch = {
            let state = self.lock()?;
            if state.failures.start {
                return Err(ApiError::HttpStatus(500));
            }
            let (entry, pool, topic): (&TitleEntry, Vec<QuestionRecord>, Option<&TopicSummary>) =
                match target {
                    StartTarget::Title(id) => {
                        let entry = state
                            .titles
                            .iter()
                            .find(|e| e.detail.name == id.as_str())
                            .ok_or(ApiError::NotFound)?;
                        (entry, entry.questions.clone(), None)
                    }
                    StartTarget::Topic(id) | StartTarget::TopicQuick(id) => {
                        let (entry, topic) = state
                            .titles
                            .iter()
                            .find_map(|e| {
                                e.detail
                                    .topics
                                    .iter()
                                    .find(|t| t.id == *id)
                                    .map(|t| (e, t))
                            })
                            .ok_or(ApiError::NotFound)?;
                        let pool = entry
                            .questions
                            .iter()
                            .filter(|q| q.topic_id.as_deref() == Some(id.as_str()))
                            .cloned()
                            .collect();
                        (entry, pool, Some(topic))
                    }
                };
            let (difficulty, count) = match (target, request) {
                (StartTarget::TopicQuick(_), _) | (_, None) => {
                    (Difficulty::Mixed, QUICK_QUIZ_MAX_QUESTIONS)
                }
                (_, Some(request)) => (request.difficulty, request.question_count),
            };
            let quiz_title = match topic {
                Some(topic) => format!("{} - {}", entry.detail.name, topic.name),
                None => entry.detail.name.clone(),
            };
            QuizLaunch {
                questions: Some(select_questions(&pool, difficulty, count)),
                context: QuizContext::for_title(&entry.path),
                time_budget_seconds: state.time_budget_seconds,
                quiz_title: Some(quiz_title),
            }
        };
        let location = self.publish_launch(launch)?;
        tracing::debug!("in-memory start for {:?} -> {}", target, location);
        Ok(StartResponse::Redirect(location))
    }

    async fn load_launch(&self, location: &str) -> Result<QuizLaunch, ApiError> {
        self.lock()?
            .launches
            .get(location)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn submit_results(&self, submission: &ResultsSubmission) -> Result<SubmitAck, ApiError> {
        let mut state = self.lock()?;
        if state.failures.submissions {
            return Err(ApiError::Connection("submission refused".into()));
        }
        state.submissions.push(submission.clone());
        let score = quiz_core::model::score_percentage(
            submission.correct_answers,
            submission.total_questions,
        );
        Ok(SubmitAck {
            success: true,
            message: Some("Results saved".into()),
            score: Some(score),
        })
    }
}

#[async_trait]
impl CatalogApi for InMemoryServer {
    async fn navigation(&self) -> Result<Vec<NavCategory>, ApiError> {
        let state = self.lock()?;
        if state.failures.catalog {
            return Err(ApiError::HttpStatus(503));
        }
        Ok(build_nav(&state.titles))
    }

    async fn title_detail(&self, path: &TitlePath) -> Result<TitleDetail, ApiError> {
        let state = self.lock()?;
        if state.failures.catalog {
            return Err(ApiError::HttpStatus(503));
        }
        state
            .titles
            .iter()
            .find(|entry| entry.path == *path)
            .map(|entry| entry.detail.clone())
            .ok_or(ApiError::NotFound)
    }
}

#[async_trait]
impl TranslationApi for InMemoryServer {
    async fn fetch_translations(&self, language: Language) -> Result<TranslationTable, ApiError> {
        let state = self.lock()?;
        if state.failures.translations.contains(&language) {
            return Err(ApiError::HttpStatus(500));
        }
        state
            .translations
            .get(&language)
            .cloned()
            .ok_or(ApiError::NotFound)
    }
}
