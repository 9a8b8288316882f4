use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing a run or writing its output.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {}", .0.display())]
    InvalidPath(PathBuf),
    /// No output format was selected.
    #[error("No output format selected (use --markdown, --raw or --json)")]
    NoOutputFormat,
    /// JSON serialisation of the model failed.
    #[error("Failed to serialise config: {0}")]
    Serialise(#[from] serde_json::Error),
    /// Atomic write operation failed.
    #[error("Atomic write to {} failed: {message}", .path.display())]
    WriteFailed { path: PathBuf, message: String },
}
