use client::ApiError;
use dioxus::prelude::*;
use services::CatalogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    /// The server could not be reached or answered with an error.
    Unavailable,
}

impl ViewError {
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            ViewError::Unknown => "error.unknown",
            ViewError::NotFound => "error.not_found",
            ViewError::Unavailable => "error.unavailable",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotFound => "This quiz could not be found.",
            ViewError::Unavailable => "The quiz server is unavailable. Please try again.",
        }
    }

    #[must_use]
    pub fn from_catalog(error: &CatalogError) -> Self {
        match error {
            CatalogError::Api(ApiError::NotFound) => ViewError::NotFound,
            CatalogError::Api(_) => ViewError::Unavailable,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
