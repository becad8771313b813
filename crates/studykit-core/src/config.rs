use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::{
    error::{Result, StudyError},
    flashcards::{DEFAULT_FLASHCARD_LIMIT, FlashcardLimit},
};

/// User settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Maximum number of flashcards; negative values are rejected
    pub flashcard_limit: i64,
    /// Fixed seed for quiz sampling, random when absent
    pub quiz_seed: Option<u64>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            flashcard_limit: DEFAULT_FLASHCARD_LIMIT as i64,
            quiz_seed: None,
        }
    }
}

impl StudyConfig {
    pub fn flashcard_limit(&self) -> Result<FlashcardLimit> {
        FlashcardLimit::try_from(self.flashcard_limit)
    }
}

pub fn get_root_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studykit")
}

/// Get the path of the default config file
pub fn get_config_path() -> PathBuf {
    get_root_config_dir().join("config.json")
}

/// Load and validate a config file
pub async fn load_config(path: &Path) -> Result<StudyConfig> {
    let json_content = fs::read_to_string(path).await?;
    let config: StudyConfig =
        serde_json::from_str(&json_content).map_err(|e| StudyError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if let Err(e) = config.flashcard_limit() {
        return Err(StudyError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        });
    }

    debug!(path = %path.display(), "config.loaded");
    Ok(config)
}

/// Load the default config file, falling back to defaults when it does not exist
pub async fn load_default_config() -> Result<StudyConfig> {
    let path = get_config_path();
    if fs::try_exists(&path).await? {
        load_config(&path).await
    } else {
        Ok(StudyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = StudyConfig::default();
        assert_eq!(config.flashcard_limit, 10);
        assert_eq!(config.quiz_seed, None);
        assert_eq!(config.flashcard_limit().unwrap().get(), 10);
    }

    #[tokio::test]
    async fn test_load_partial_config() {
        let file = write_config(r#"{"quiz_seed": 42}"#);
        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.quiz_seed, Some(42));
        assert_eq!(config.flashcard_limit, 10);
    }

    #[tokio::test]
    async fn test_negative_limit_is_invalid() {
        let file = write_config(r#"{"flashcard_limit": -3}"#);
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, StudyError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("-3"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid() {
        let file = write_config("{ not json");
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, StudyError::ConfigInvalid { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, StudyError::IoError(_)));
    }
}
