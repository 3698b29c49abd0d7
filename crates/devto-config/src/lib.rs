mod config;
mod deepl_config;
mod devto_config;
mod error;
mod log_level;
mod logging_config;
mod translate_config;


pub use config::Config;
pub use deepl_config::DeepLConfig;
pub use devto_config::DevToConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use translate_config::TranslateConfig;

const CONFIG_DIR_ENV: &str = "DEVTO_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".devto";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DEVTO_BASE_URL: &str = "https://dev.to";
const DEFAULT_DEVTO_API_KEY_VAR: &str = "DEV_TO_GIT_TOKEN";

const DEFAULT_DEEPL_API_KEY_VAR: &str = "DEEPL_API_KEY";
const DEFAULT_DEEPL_TARGET_LANG: &str = "EN-US";

const DEFAULT_SOURCE_DIR: &str = "articles";
const DEFAULT_OUTPUT_DIR: &str = "translate";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
