//! Model artifact errors

use thiserror::Error;

/// Load-time errors for persisted HMM artifacts
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed model artifact: {0}")]
    Malformed(String),

    #[error("Expected a {expected}-state model, artifact has {actual} states")]
    StateCount { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
