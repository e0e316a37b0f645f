#![forbid(unsafe_code)]

pub mod api;
pub mod http;
pub mod memory;

pub use api::{
    ApiError, Backend, CatalogApi, QuizApi, ResultsSubmission, StartResponse, SubmitAck,
    SubmittedWrongAnswer, TranslationApi,
};
pub use http::{ClientConfig, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT, HttpQuizServer};
pub use memory::{CatalogFixture, InMemoryServer, TitleFixture};
