use thiserror::Error;

use crate::countdown::CountdownError;
use crate::model::{
    DifficultyParseError, ParseIdError, QuestionError, SessionError, StartRequestError,
    UnsupportedLanguage,
};
use crate::text::LanguageFilterParseError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Countdown(#[from] CountdownError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyParseError),
    #[error(transparent)]
    Filter(#[from] LanguageFilterParseError),
    #[error(transparent)]
    Language(#[from] UnsupportedLanguage),
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    StartRequest(#[from] StartRequestError),
}
