//! Application layer - Use cases and port interfaces
//!
//! Contains the transcript store, the session event loop, and trait
//! definitions for external system interactions.

pub mod events;
pub mod ports;
pub mod session;
pub mod store;

// Re-export use cases
pub use events::SessionEvent;
pub use session::{DictationSession, SessionOptions};
pub use store::TranscriptStore;
