//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! the JSON transcript slot, the XDG config store, and the
//! terminal presentation sink.

pub mod config;
pub mod presentation;
pub mod storage;

// Re-export adapters
pub use config::XdgConfigStore;
pub use presentation::ConsoleSink;
pub use storage::JsonFileStorage;
