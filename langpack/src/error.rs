//! All error types for the langpack crate.
//!
//! These are returned from all fallible operations (validation, parsing,
//! translation, serialization).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input path `{0}` does not exist")]
    InvalidPath(PathBuf),

    #[error("`{0}` is not a recognized ISO 639-1 language code")]
    InvalidLanguage(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("translation failed: {message}")]
    Translation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Creates a new translation error with optional source error
    pub fn translation_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Translation {
            message: message.into(),
            source,
        }
    }
}
