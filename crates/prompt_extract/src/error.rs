use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("source file not found at {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern for {key}: {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown prompt key: {0}")]
    UnknownKey(String),

    #[error("unknown agent kind: {0}")]
    UnknownAgent(String),

    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
