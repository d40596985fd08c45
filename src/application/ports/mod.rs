//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod presentation;
pub mod storage;
pub mod utterance;

// Re-export common types
pub use config::ConfigStore;
pub use presentation::{PresentationError, PresentationSink};
pub use storage::{StorageError, TranscriptStorage};
pub use utterance::{UtteranceError, UtteranceSource};
