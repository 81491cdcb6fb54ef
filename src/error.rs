use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal outcomes of a single scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("cannot access {}: {source}", path.display())]
    PathInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan cancelled")]
    Cancelled,

    #[error("failed to read {}: {source}", path.display())]
    TraversalFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Application-wide error type for the dua CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
