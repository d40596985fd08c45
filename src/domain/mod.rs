//! Domain layer - Core business logic
//!
//! Contains the transcript entry model, the dictation rules (symbol tables,
//! normalizer, classifier), configuration, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod dictation;
pub mod error;
pub mod transcript;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use transcript::{EntryContent, EntryKind, Point, TranscriptEntry, LINE_HEIGHT};
