use crate::ClientError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while translating an article
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML front matter: {message} {location}")]
    Yaml {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing YAML front matter header (expected '---' as first line)")]
    MissingFrontMatter,

    #[error("unterminated YAML front matter (missing closing '---' line)")]
    UnterminatedFrontMatter,

    #[error("front matter must be a YAML mapping")]
    FrontMatterNotMapping,

    #[error("front matter has no 'title'")]
    MissingTitle,

    #[error("Translation failed: {0}")]
    Client(#[from] ClientError),
}

impl TranslateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert YAML error with context
    #[track_caller]
    pub fn from_yaml(err: serde_yaml::Error) -> Self {
        TranslateError::Yaml {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for TranslateError {
    #[track_caller]
    fn from(err: serde_yaml::Error) -> Self {
        TranslateError::from_yaml(err)
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
