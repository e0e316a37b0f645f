#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod localization;
pub mod reporter;
pub mod timer;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use catalog::{CatalogService, QuizSetup};
pub use controller::{
    AnswerFeedback, Explanation, LOAD_ERROR_KEY, LoadFailure, NO_EXPLANATION_KEY,
    NO_EXPLANATION_TEXT, OptionState, QuizAction, QuizController, QuizPhase, TickOutcome,
};
pub use error::{AppServicesError, CatalogError, LocalizationError, QuizError};
pub use localization::{LocalizationService, Localizer, TableSource};
pub use reporter::{NavigationTarget, ResultsReporter};
pub use timer::{SessionTimer, TICK_PERIOD, TimerTick};
