use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Flashcard limit must be zero or greater, got {limit}")]
    NegativeLimit { limit: i64 },

    #[error("Invalid config at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudyError>;
