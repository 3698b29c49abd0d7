use crate::{ArticlePayload, CliClientResult, ClientError};

use bytes::Bytes;
use log::debug;
use reqwest::{
    Client as ReqwestClient, StatusCode, Url,
    header::{CONTENT_TYPE, HeaderValue},
};

/// Header dev.to reads the API key from
pub const API_KEY_HEADER: &str = "api-key";

/// HTTP client for the dev.to article API
pub struct Client {
    pub articles_url: String,
    api_key: String,
    client: ReqwestClient,
}

/// Status and raw body of an API response. The body is never parsed.
#[derive(Debug, Clone)]
pub struct ArticleResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `articles_url` - Full endpoint URL (e.g., "https://dev.to/api/articles")
    /// * `api_key` - Sent verbatim in the `api-key` header, even when empty
    pub fn new(articles_url: &str, api_key: &str) -> Self {
        Self {
            articles_url: articles_url.to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a client from configuration, reading the API key from the
    /// environment variable named in `devto.api_key_var`.
    ///
    /// An unset (or non-UTF-8) variable yields an empty key.
    pub fn from_config(config: &devto_config::Config) -> Self {
        let api_key = std::env::var(&config.devto.api_key_var).unwrap_or_default();
        let client = Self::new(&config.articles_url(), &api_key);
        if !client.has_api_key() {
            debug!("${} is empty or unset", config.devto.api_key_var);
        }

        client
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// POST the payload and return the raw response.
    ///
    /// The status code is reported, never checked: a 4xx/5xx answer is an
    /// `Ok` whose body carries the server's error document.
    pub async fn create_article(
        &self,
        payload: &ArticlePayload,
    ) -> CliClientResult<ArticleResponse> {
        let url = Url::parse(&self.articles_url).map_err(|e| {
            ClientError::request(format!("invalid URL '{}': {}", self.articles_url, e))
        })?;

        let api_key = HeaderValue::from_str(&self.api_key).map_err(|e| {
            ClientError::request(format!("invalid {} header value: {}", API_KEY_HEADER, e))
        })?;

        let body = serde_json::to_vec(payload).map_err(|e| {
            ClientError::request(format!("cannot encode article payload: {}", e))
        })?;

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(API_KEY_HEADER, api_key)
            .body(body)
            .build()
            .map_err(|e| ClientError::request(e.to_string()))?;

        debug!("POST {}", request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!("dev.to answered {}", status);

        let body = response.bytes().await.map_err(|e| ClientError::body(e))?;

        Ok(ArticleResponse { status, body })
    }
}
