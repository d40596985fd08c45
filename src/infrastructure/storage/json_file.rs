//! JSON file transcript slot adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::application::ports::{StorageError, TranscriptStorage};
use crate::domain::transcript::TranscriptEntry;

/// The persisted transcript slot as a single JSON file.
///
/// An absent file is an empty log; a file that fails to parse is
/// treated the same way (with a warning), matching the never-fatal read
/// policy of the store.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a slot at the default XDG data location.
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("exam-scribe");

        Self {
            path: data_dir.join("transcript.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the slot file path
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<TranscriptEntry>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed transcript slot, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[TranscriptEntry]) -> Result<(), StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }

    async fn remove(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::RemoveFailed(e.to_string())),
        }
    }
}
