//! Error types for deploy-fs

use std::path::PathBuf;

/// Result type for deploy-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in deploy-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid {encoding} text")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Working directory is unavailable: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
