use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("Test artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Invalid file type. Expected {expected}: {path}")]
    InvalidArtifactType { expected: String, path: PathBuf },

    #[error("{tool} not found: {path}")]
    ToolNotFound { tool: String, path: PathBuf },

    #[error("Error executing {label}:\n{stderr}")]
    ToolExecutionFailure {
        /// Human-readable label, e.g. "JMeter test" or "Gatling simulation"
        label: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("{label} timed out after {seconds}s")]
    ToolTimeout { label: String, seconds: u64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, RigError>;
