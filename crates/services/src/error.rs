//! Shared error types for the services crate.

use thiserror::Error;

use client::ApiError;
use quiz_core::model::{SessionError, StartRequestError};

use crate::controller::QuizPhase;

/// Errors emitted by `QuizController`. None of them change controller state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("operation not allowed while {phase:?}")]
    InvalidPhase { phase: QuizPhase },
    #[error("no option selected")]
    NoSelection,
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("option {index} is outside {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("quiz already finished")]
    Finished,
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question count {count} is not offered")]
    CountNotOffered { count: u32 },
    #[error("nothing to start: no questions available")]
    NoQuestions,
    #[error(transparent)]
    Request(#[from] StartRequestError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while fetching translation tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LocalizationError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not read catalog fixture {path}: {source}")]
    Fixture {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
