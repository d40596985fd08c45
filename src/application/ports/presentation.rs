//! Presentation sink port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::TranscriptEntry;

/// Presentation errors
#[derive(Debug, Clone, Error)]
pub enum PresentationError {
    #[error("Failed to render transcript: {0}")]
    RenderFailed(String),
}

/// Port for the external rendering surface.
///
/// Receives the full ordered log after every mutation; mapping entry
/// kinds to visual styles is the sink's business, not the interpreter's.
/// Edits made on the surface come back as `ContentEdited` session events.
#[async_trait]
pub trait PresentationSink: Send + Sync {
    /// Render the complete transcript.
    async fn render(&self, entries: &[TranscriptEntry]) -> Result<(), PresentationError>;
}

/// Blanket implementation for boxed sinks
#[async_trait]
impl PresentationSink for Box<dyn PresentationSink> {
    async fn render(&self, entries: &[TranscriptEntry]) -> Result<(), PresentationError> {
        self.as_ref().render(entries).await
    }
}
