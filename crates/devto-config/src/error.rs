use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a dev.to API section error
    #[track_caller]
    pub fn devto<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "DevTo",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a DeepL section error
    #[track_caller]
    pub fn deepl<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "DeepL",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a translate section error
    #[track_caller]
    pub fn translate<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Translate",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
