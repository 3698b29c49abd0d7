use crate::{CliClientResult, ClientError, Translator};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEEPL_FREE_SERVER_URL: &str = "https://api-free.deepl.com";
const DEEPL_PRO_SERVER_URL: &str = "https://api.deepl.com";
const DEEPL_FREE_KEY_SUFFIX: &str = ":fx";

/// HTTP client for the DeepL v2 translation API
pub struct DeepLClient {
    pub base_url: String,
    pub target_lang: String,
    auth_key: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

impl DeepLClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL override. None = free or pro server, chosen from the key
    /// * `auth_key` - DeepL authentication key
    /// * `target_lang` - Target language code (e.g., "EN-US")
    pub fn new(base_url: Option<&str>, auth_key: &str, target_lang: &str) -> Self {
        let base_url = base_url.unwrap_or_else(|| Self::server_url_for_key(auth_key));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            target_lang: target_lang.to_string(),
            auth_key: auth_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Free-plan keys end in ":fx" and must use the free server.
    pub fn server_url_for_key(auth_key: &str) -> &'static str {
        if auth_key.ends_with(DEEPL_FREE_KEY_SUFFIX) {
            DEEPL_FREE_SERVER_URL
        } else {
            DEEPL_PRO_SERVER_URL
        }
    }

    /// Translate a single text into the configured target language.
    ///
    /// Blank input is returned as-is without calling the API.
    pub async fn translate_text(&self, text: &str) -> CliClientResult<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let body = TranslateRequest {
            text: [text],
            target_lang: &self.target_lang,
        };

        let url = format!("{}/v2/translate", self.base_url);
        debug!("POST {} ({} chars)", url, text.len());

        let response = self
            .client
            .request(Method::POST, &url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ClientError::body(e))?;

        if !status.is_success() {
            // DeepL reports errors as {"message": "..."}; some statuses have no body
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let parsed: TranslateResponse = serde_json::from_slice(&bytes)?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| ClientError::api_error(status.as_u16(), "empty translation list".into()))
    }
}

#[async_trait]
impl Translator for DeepLClient {
    async fn translate(&self, text: &str) -> CliClientResult<String> {
        self.translate_text(text).await
    }
}
