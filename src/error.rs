// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to read input {path}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid element export in {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Element #{index} (expressID {express_id:?}) failed")]
    Element {
        index: usize,
        express_id: String,
        #[source]
        source: Box<PipelineError>,
    },

    #[error("Failed to write output {path}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
