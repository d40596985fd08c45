//! Transcript storage port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::TranscriptEntry;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read transcript slot: {0}")]
    ReadFailed(String),

    #[error("Failed to write transcript slot: {0}")]
    WriteFailed(String),

    #[error("Failed to remove transcript slot: {0}")]
    RemoveFailed(String),
}

/// Port for the single persisted transcript slot.
///
/// The slot holds one serialized ordered entry sequence. Absent data is
/// an empty log, not an error; only genuine I/O failures surface as
/// `StorageError`.
#[async_trait]
pub trait TranscriptStorage: Send + Sync {
    /// Read the persisted log. An absent or malformed slot yields an
    /// empty sequence.
    async fn load(&self) -> Result<Vec<TranscriptEntry>, StorageError>;

    /// Replace the persisted log with `entries`.
    async fn save(&self, entries: &[TranscriptEntry]) -> Result<(), StorageError>;

    /// Delete the slot entirely. Removing an absent slot succeeds.
    async fn remove(&self) -> Result<(), StorageError>;
}
