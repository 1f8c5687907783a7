use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::retry::{is_retryable_status, with_retry_if, RetryConfig};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl ApiError {
    /// Network hiccups and server-side trouble are worth another try;
    /// a 4xx will fail the same way every time
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::RequestFailed { status, .. } => reqwest::StatusCode::from_u16(*status)
                .map(is_retryable_status)
                .unwrap_or(false),
            ApiError::NetworkError(_) => true,
            ApiError::ClientBuild(_) | ApiError::ParseError(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Recipe as the remote API sends it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub author: Option<String>,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchPage {
    #[serde(default)]
    pub items: Vec<ApiRecipe>,
    #[serde(default)]
    pub total: usize,
    pub page: u32,
    pub page_size: usize,
}

/// Query parameters for `GET /recipes`
#[derive(Debug, Clone, Default)]
pub struct ApiSearchParams {
    pub query: String,
    pub tags: Vec<String>,
    pub min_rating: Option<f64>,
    pub page: u32,
    pub page_size: usize,
}

impl ApiSearchParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];

        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }

        if let Some(min) = self.min_rating {
            pairs.push(("minRating", min.to_string()));
        }

        pairs
    }
}

pub struct RecipeApiClient {
    client: reqwest::Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl RecipeApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("RecipeExplorer/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry_config: RetryConfig::default(),
        })
    }

    /// Swap the retry policy
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search recipes - `GET /recipes`
    pub async fn search_recipes(&self, params: &ApiSearchParams) -> Result<ApiSearchPage> {
        let url = format!("{}/recipes", self.base_url);
        let pairs = params.to_pairs();

        with_retry_if(&self.retry_config, ApiError::is_retryable, || async {
            debug!("GET {} {:?}", url, pairs);
            let response = self.client.get(&url).query(&pairs).send().await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::RequestFailed { status, body });
            }

            let body = response.text().await?;
            let page: ApiSearchPage = serde_json::from_str(&body)?;
            Ok(page)
        })
        .await
    }

    /// Fetch one recipe - `GET /recipes/{id}`; a 404 is `None`, not an error
    pub async fn get_recipe(&self, id: &str) -> Result<Option<ApiRecipe>> {
        let url = format!("{}/recipes/{}", self.base_url, urlencoding::encode(id));

        with_retry_if(&self.retry_config, ApiError::is_retryable, || async {
            debug!("GET {}", url);
            let response = self.client.get(&url).send().await?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::RequestFailed { status, body });
            }

            let body = response.text().await?;
            let recipe: ApiRecipe = serde_json::from_str(&body)?;
            Ok(Some(recipe))
        })
        .await
    }
}
