//! Error types for fa-enumgen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Generator errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Download error: {0}")]
    Download(String),

    #[error("Archive is empty")]
    EmptyArchive,

    #[error("Archive does not contain {0}")]
    MissingEntry(String),

    #[error("Expected exactly one stylesheet matching {pattern}, found {found}")]
    StylesheetLookup { pattern: String, found: usize },

    #[error("Invalid icon '{name}': {reason}")]
    InvalidIcon { name: String, reason: String },

    #[error("Invalid version '{0}'")]
    Version(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_icon(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidIcon {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<minijinja::Error> for Error {
    fn from(e: minijinja::Error) -> Self {
        Error::Render(e.to_string())
    }
}
