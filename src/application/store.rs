//! Transcript store: in-memory log, question counter, write-through persistence

use tracing::{debug, warn};

use crate::domain::dictation::{classify, normalize, question_number};
use crate::domain::transcript::{EntryContent, Point, TranscriptEntry};

use super::ports::{StorageError, TranscriptStorage};

/// The ordered transcript log together with its question counter, backed
/// by a single persisted slot.
///
/// Every mutation is write-through: the slot is persisted first and the
/// in-memory view only adopts the result on success, so memory and slot
/// never diverge on the success path. Callers are expected to serialize
/// access (one session task owns the store).
pub struct TranscriptStore<S: TranscriptStorage> {
    storage: S,
    entries: Vec<TranscriptEntry>,
    question_counter: u32,
}

impl<S: TranscriptStorage> TranscriptStore<S> {
    /// Create an empty store over a storage slot. Call [`hydrate`] before
    /// first use to pick up a previous session's log.
    ///
    /// [`hydrate`]: TranscriptStore::hydrate
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            question_counter: 1,
        }
    }

    /// The ordered log as currently held in memory.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// The number the next question entry will carry.
    pub fn question_counter(&self) -> u32 {
        self.question_counter
    }

    /// Load the persisted log into memory, once, at startup.
    ///
    /// An absent or unreadable slot is a fresh start, never an error. The
    /// question counter is recovered from the highest leading "N." label
    /// among numbered entries, so numbering continues across restarts.
    pub async fn hydrate(&mut self) -> &[TranscriptEntry] {
        self.entries = match self.storage.load().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "transcript slot unreadable, starting empty");
                Vec::new()
            }
        };
        self.question_counter = recover_counter(&self.entries);
        &self.entries
    }

    /// Normalize and classify one finalized utterance, then append the
    /// resulting entry. Returns the appended entry.
    pub async fn dictate(
        &mut self,
        utterance: &str,
        cursor: Point,
    ) -> Result<TranscriptEntry, StorageError> {
        let normalized = normalize(utterance);
        let (entry, counter) = classify(&normalized, cursor, &self.entries, self.question_counter);
        self.append(vec![entry.clone()]).await?;
        self.question_counter = counter;
        Ok(entry)
    }

    /// Append entries to the log: read the persisted copy, concatenate,
    /// persist, then adopt the persisted result in memory.
    pub async fn append(&mut self, entries: Vec<TranscriptEntry>) -> Result<(), StorageError> {
        let mut log = self.storage.load().await.unwrap_or_default();
        log.extend(entries);
        self.storage.save(&log).await?;
        self.entries = log;
        Ok(())
    }

    /// Replace the content of the entry at `index` with a single string;
    /// kind and position stay untouched. An out-of-range index against
    /// the persisted copy is a no-op.
    pub async fn edit_content(
        &mut self,
        index: usize,
        new_content: &str,
    ) -> Result<(), StorageError> {
        let mut log = self.storage.load().await.unwrap_or_default();
        let Some(entry) = log.get_mut(index) else {
            debug!(index, len = log.len(), "edit target out of range, ignoring");
            return Ok(());
        };
        entry.content = EntryContent::text(new_content);
        self.storage.save(&log).await?;
        self.entries = log;
        Ok(())
    }

    /// Delete the slot, empty the log, and reset the counter to 1.
    pub async fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove().await?;
        self.entries.clear();
        self.question_counter = 1;
        Ok(())
    }
}

// Highest persisted question label + 1, or 1 for a log without questions.
fn recover_counter(entries: &[TranscriptEntry]) -> u32 {
    entries
        .iter()
        .filter(|entry| entry.kind.is_numbered())
        .filter_map(|entry| entry.content.as_text())
        .filter_map(question_number)
        .max()
        .map(|n| n + 1)
        .unwrap_or(1)
}
