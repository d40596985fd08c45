//! Transcript domain module

mod entry;

pub use entry::{EntryContent, EntryKind, Point, TranscriptEntry, ALL_KINDS, LINE_HEIGHT};
