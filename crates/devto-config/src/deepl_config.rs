use crate::devto_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEEPL_API_KEY_VAR, DEFAULT_DEEPL_TARGET_LANG};

use serde::Deserialize;

/// Settings for the DeepL translation API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeepLConfig {
    /// Explicit server URL. None = pick free/pro server from the key.
    pub base_url: Option<String>,
    /// Name of the environment variable holding the auth key
    pub api_key_var: String,
    pub target_lang: String,
}

impl Default for DeepLConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key_var: String::from(DEFAULT_DEEPL_API_KEY_VAR),
            target_lang: String::from(DEFAULT_DEEPL_TARGET_LANG),
        }
    }
}

impl DeepLConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref url) = self.base_url
            && !is_http_url(url)
        {
            return Err(ConfigError::deepl(format!(
                "deepl.base_url must start with http:// or https://, got '{}'",
                url
            )));
        }

        if self.api_key_var.trim().is_empty() {
            return Err(ConfigError::deepl("deepl.api_key_var cannot be empty"));
        }

        if self.target_lang.trim().is_empty() {
            return Err(ConfigError::deepl("deepl.target_lang cannot be empty"));
        }

        Ok(())
    }
}
