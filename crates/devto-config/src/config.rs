use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRNAME,
    DeepLConfig, DevToConfig, LoggingConfig, TranslateConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub devto: DevToConfig,
    pub deepl: DeepLConfig,
    pub translate: TranslateConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DEVTO_CONFIG_DIR env var, else use ./.devto/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply DEVTO_* environment variable overrides
    ///
    /// Never creates the config directory. Does NOT validate - call
    /// validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.is_file() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DEVTO_CONFIG_DIR env var > ./.devto/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.devto.validate()?;
        self.deepl.validate()?;
        self.translate.validate()?;

        Ok(())
    }

    /// Endpoint that creates articles.
    pub fn articles_url(&self) -> String {
        format!("{}/api/articles", self.devto.base_url.trim_end_matches('/'))
    }

    /// Log configuration summary (NEVER logs secrets, only variable names).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  devto: {} (key from ${})",
            self.devto.base_url, self.devto.api_key_var
        );
        debug!(
            "  deepl: {} -> {} (key from ${})",
            self.deepl.base_url.as_deref().unwrap_or("auto"),
            self.deepl.target_lang,
            self.deepl.api_key_var
        );
        debug!(
            "  translate: {} -> {}",
            self.translate.source_dir, self.translate.output_dir
        );
        debug!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // dev.to
        Self::apply_env_string("DEVTO_API_BASE_URL", &mut self.devto.base_url);
        Self::apply_env_string("DEVTO_API_KEY_VAR", &mut self.devto.api_key_var);

        // DeepL
        Self::apply_env_option_string("DEVTO_DEEPL_BASE_URL", &mut self.deepl.base_url);
        Self::apply_env_string("DEVTO_DEEPL_API_KEY_VAR", &mut self.deepl.api_key_var);
        Self::apply_env_string("DEVTO_DEEPL_TARGET_LANG", &mut self.deepl.target_lang);

        // Translate
        Self::apply_env_string("DEVTO_TRANSLATE_SOURCE_DIR", &mut self.translate.source_dir);
        Self::apply_env_string("DEVTO_TRANSLATE_OUTPUT_DIR", &mut self.translate.output_dir);

        // Logging
        Self::apply_env_parse("DEVTO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DEVTO_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
