use std::path::Path;
use std::sync::Arc;

use client::{Backend, CatalogFixture, ClientConfig, HttpQuizServer, InMemoryServer};
use quiz_core::model::QuizLaunch;

use crate::Clock;
use crate::catalog::CatalogService;
use crate::controller::{QuizController, QuizPhase};
use crate::error::{AppServicesError, QuizError};
use crate::localization::LocalizationService;
use crate::reporter::ResultsReporter;

/// Assembles app-facing services over one server backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    default_time_budget: Option<u32>,
    catalog: Arc<CatalogService>,
    reporter: Arc<ResultsReporter>,
    localization: Arc<LocalizationService>,
}

impl AppServices {
    #[must_use]
    pub fn new(backend: Backend, clock: Clock) -> Self {
        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&backend.catalog),
            Arc::clone(&backend.quizzes),
        ));
        let reporter = Arc::new(ResultsReporter::new(Arc::clone(&backend.quizzes)));
        let localization = Arc::new(LocalizationService::new(Arc::clone(&backend.translations)));
        Self {
            clock,
            default_time_budget: None,
            catalog,
            reporter,
            localization,
        }
    }

    /// Build services talking to a quiz server over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Api` if the HTTP client cannot be built.
    pub fn http(config: ClientConfig, clock: Clock) -> Result<Self, AppServicesError> {
        tracing::info!("using quiz server at {}", config.base_url);
        let server = HttpQuizServer::new(config)?;
        Ok(Self::new(Backend::from_server(server), clock))
    }

    #[must_use]
    pub fn in_memory(server: InMemoryServer, clock: Clock) -> Self {
        Self::new(Backend::from_server(server), clock)
    }

    /// Build services over an in-memory server loaded from a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the file cannot be read or parsed.
    pub fn offline(path: &Path, clock: Clock) -> Result<Self, AppServicesError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppServicesError::Fixture {
            path: path.display().to_string(),
            source,
        })?;
        let fixture = CatalogFixture::from_json(&json)?;
        tracing::info!(
            "offline catalog loaded from {} ({} titles)",
            path.display(),
            fixture.titles.len()
        );
        Ok(Self::in_memory(InMemoryServer::from_fixture(fixture), clock))
    }

    /// Time budget applied to launches that carry none.
    #[must_use]
    pub fn with_default_time_budget(mut self, seconds: Option<u32>) -> Self {
        self.default_time_budget = seconds.filter(|s| *s > 0);
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn default_time_budget(&self) -> Option<u32> {
        self.default_time_budget
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn reporter(&self) -> Arc<ResultsReporter> {
        Arc::clone(&self.reporter)
    }

    #[must_use]
    pub fn localization(&self) -> Arc<LocalizationService> {
        Arc::clone(&self.localization)
    }

    /// A fresh controller initialized from `launch`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` only if the new controller rejects initialization.
    pub fn controller_for(&self, launch: &QuizLaunch) -> Result<QuizController, QuizError> {
        let mut controller = QuizController::new(self.clock);
        let budget = launch.time_budget_seconds.or(self.default_time_budget);
        let phase = controller.initialize(launch.questions.clone(), budget)?;
        if phase == QuizPhase::Error {
            tracing::debug!("launch {:?} produced an error view", launch.quiz_title);
        }
        Ok(controller)
    }
}
