use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEVTO_API_KEY_VAR, DEFAULT_DEVTO_BASE_URL};

use serde::Deserialize;

/// Settings for the dev.to article API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DevToConfig {
    /// Scheme and host of the API, without the `/api/...` path
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_var: String,
}

impl Default for DevToConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_DEVTO_BASE_URL),
            api_key_var: String::from(DEFAULT_DEVTO_API_KEY_VAR),
        }
    }
}

impl DevToConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::devto(format!(
                "devto.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.api_key_var.trim().is_empty() {
            return Err(ConfigError::devto("devto.api_key_var cannot be empty"));
        }

        Ok(())
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    matches!(rest, Some(host) if !host.is_empty())
}
