use std::env;
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::{
    Language, NavCategory, QuizLaunch, StartQuizRequest, StartTarget, TitleDetail, TitlePath,
    TranslationTable,
};
use reqwest::{Client, Response, StatusCode, header, redirect};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{
    ApiError, CatalogApi, QuizApi, ResultsSubmission, StartResponse, SubmitAck, TranslationApi,
};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads `QUIZ_SERVER_URL`, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var("QUIZ_SERVER_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.into());
        Self::new(&base_url)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an API path below the base URL, keeping any base path prefix.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when the result is not a valid URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// Resolve a `Location` issued by the server, which is already rooted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when the result is not a valid URL.
    pub fn location(&self, location: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(location)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

/// Quiz server reached over HTTP. Redirects are surfaced, never followed.
#[derive(Clone)]
pub struct HttpQuizServer {
    client: Client,
    config: ClientConfig,
}

impl HttpQuizServer {
    /// # Errors
    ///
    /// Returns `ApiError::Connection` when the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        decode(ensure_success(response)?).await
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Connection(e.to_string())
        }
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::HttpStatus(status.as_u16()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl QuizApi for HttpQuizServer {
    async fn start_quiz(
        &self,
        target: &StartTarget,
        request: Option<StartQuizRequest>,
    ) -> Result<StartResponse, ApiError> {
        let url = self.config.endpoint(&target.path())?;
        tracing::debug!("POST {} ({:?})", url, request);
        let mut builder = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json");
        if let Some(request) = request {
            builder = builder.form(&request);
        }
        let response = builder.send().await?;

        if response.status().is_redirection() {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
                .ok_or(ApiError::MissingLocation)?;
            return Ok(StartResponse::Redirect(location));
        }

        let body: serde_json::Value = decode(ensure_success(response)?).await?;
        StartResponse::from_json(body)
    }

    async fn load_launch(&self, location: &str) -> Result<QuizLaunch, ApiError> {
        self.get_json(self.config.location(location)?).await
    }

    async fn submit_results(&self, submission: &ResultsSubmission) -> Result<SubmitAck, ApiError> {
        let url = self.config.endpoint("/quiz/submit-results")?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(submission).send().await?;
        let response = ensure_success(response)?;
        // Some deployments answer with an empty body.
        Ok(decode(response).await.unwrap_or_default())
    }
}

#[async_trait]
impl CatalogApi for HttpQuizServer {
    async fn navigation(&self) -> Result<Vec<NavCategory>, ApiError> {
        self.get_json(self.config.endpoint("/quiz/categories")?)
            .await
    }

    async fn title_detail(&self, path: &TitlePath) -> Result<TitleDetail, ApiError> {
        self.get_json(self.config.endpoint(&path.url())?).await
    }
}

#[async_trait]
impl TranslationApi for HttpQuizServer {
    async fn fetch_translations(&self, language: Language) -> Result<TranslationTable, ApiError> {
        let path = format!("/translations/{}.json", language.code());
        self.get_json(self.config.endpoint(&path)?).await
    }
}
