//! Utterance source port interface

use async_trait::async_trait;

use thiserror::Error;

/// Speech capture errors
#[derive(Debug, Clone, Error)]
pub enum UtteranceError {
    #[error("No speech capture capability on this host")]
    Unavailable,

    #[error("Failed to start listening: {0}")]
    StartFailed(String),

    #[error("Failed to stop listening: {0}")]
    StopFailed(String),
}

/// Port for the external speech capture capability.
///
/// Implementations deliver finalized utterance strings through the
/// session's event channel; partial results are never surfaced. Listening
/// is a binary toggle with no intermediate state.
#[async_trait]
pub trait UtteranceSource: Send + Sync {
    /// Whether the host has a usable speech capability at all.
    /// Probed once at session startup; `false` disables dictation but
    /// leaves editing and rendering functional.
    fn available(&self) -> bool;

    /// Begin delivering finalized utterances.
    async fn start(&self) -> Result<(), UtteranceError>;

    /// Stop delivering utterances. Already-finalized utterances in
    /// flight may still arrive; the session drops them.
    async fn stop(&self) -> Result<(), UtteranceError>;
}

/// Blanket implementation for boxed sources
#[async_trait]
impl UtteranceSource for Box<dyn UtteranceSource> {
    fn available(&self) -> bool {
        self.as_ref().available()
    }

    async fn start(&self) -> Result<(), UtteranceError> {
        self.as_ref().start().await
    }

    async fn stop(&self) -> Result<(), UtteranceError> {
        self.as_ref().stop().await
    }
}
