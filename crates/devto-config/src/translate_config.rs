use crate::{ConfigError, ConfigErrorResult, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};

use serde::Deserialize;

/// Where the translator reads articles from and writes translations to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub source_dir: String,
    pub output_dir: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            source_dir: String::from(DEFAULT_SOURCE_DIR),
            output_dir: String::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl TranslateConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.source_dir.trim().is_empty() {
            return Err(ConfigError::translate("translate.source_dir cannot be empty"));
        }

        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::translate("translate.output_dir cannot be empty"));
        }

        if self.source_dir == self.output_dir {
            return Err(ConfigError::translate(
                "translate.source_dir and translate.output_dir must differ",
            ));
        }

        Ok(())
    }
}
