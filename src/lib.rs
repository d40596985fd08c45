//! ExamScribe - voice dictation interpreter for structured exam documents
//!
//! This crate turns finalized speech utterances into a typed, persisted
//! transcript: spoken punctuation and math vocabulary become symbols, and
//! leading keywords ("Heading", "Questions", "Options", ...) become
//! structured, auto-numbered entries.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Symbol tables, the utterance normalizer, the command
//!   classifier, the transcript entry model, and configuration
//! - **Application**: The transcript store, the session event loop, and
//!   port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (JSON transcript slot,
//!   XDG config store, terminal renderer)
//! - **CLI**: Command-line interface, argument parsing, and the
//!   interactive console
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
