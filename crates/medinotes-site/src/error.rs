//! Error Types

use std::path::PathBuf;

use thiserror::Error;

use medinotes_core::{ConfigError, ConsistencyError, OutputMode};

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Export and preview errors
#[derive(Error, Debug)]
pub enum SiteError {
    /// Invalid build configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendered page breaks the landing contract (strict mode)
    #[error("Consistency check failed: {0}")]
    Consistency(#[from] ConsistencyError),

    /// `export` invoked with a non-static output mode
    #[error("Output mode is {0}; static export requires \"export\"")]
    NotStatic(OutputMode),

    /// Filesystem error with the offending path
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
