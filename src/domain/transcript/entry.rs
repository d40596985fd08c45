//! Transcript entry value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertical distance between consecutive entries.
pub const LINE_HEIGHT: f64 = 30.0;

/// All entry kinds, in no particular order.
pub const ALL_KINDS: &[EntryKind] = &[
    EntryKind::Heading,
    EntryKind::Subheading,
    EntryKind::Question,
    EntryKind::NextQuestion,
    EntryKind::Options,
    EntryKind::Title,
    EntryKind::Text,
];

/// Kind of a transcript entry, as produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Heading,
    Subheading,
    Question,
    NextQuestion,
    Options,
    Title,
    #[default]
    Text,
}

impl EntryKind {
    /// Get the serialized identifier for this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Subheading => "subheading",
            Self::Question => "question",
            Self::NextQuestion => "nextquestion",
            Self::Options => "options",
            Self::Title => "title",
            Self::Text => "text",
        }
    }

    /// Whether entries of this kind consume the question counter
    pub const fn is_numbered(&self) -> bool {
        matches!(self, Self::Question | Self::NextQuestion)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry content: a single line of text, or the option items of an
/// `options` entry. Serialized untagged, so a plain JSON string and a
/// JSON array of strings both round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryContent {
    Text(String),
    Items(Vec<String>),
}

impl EntryContent {
    /// Build text content
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Build option-list content
    pub fn items(values: Vec<String>) -> Self {
        Self::Items(values)
    }

    /// The content as a single string, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Items(_) => None,
        }
    }
}

/// Insertion position of an entry on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One classified line of the transcript log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub content: EntryContent,
    pub position: Point,
}

impl TranscriptEntry {
    pub fn new(kind: EntryKind, content: EntryContent, position: Point) -> Self {
        Self {
            kind,
            content,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntryKind::NextQuestion).unwrap(),
            "\"nextquestion\""
        );
        assert_eq!(
            serde_json::to_string(&EntryKind::Heading).unwrap(),
            "\"heading\""
        );
    }

    #[test]
    fn kind_as_str_matches_serialized_name() {
        for kind in ALL_KINDS {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn all_kinds_constant() {
        assert_eq!(ALL_KINDS.len(), 7);
    }

    #[test]
    fn numbered_kinds() {
        assert!(EntryKind::Question.is_numbered());
        assert!(EntryKind::NextQuestion.is_numbered());
        assert!(!EntryKind::Options.is_numbered());
        assert!(!EntryKind::Text.is_numbered());
    }

    #[test]
    fn default_kind_is_text() {
        assert_eq!(EntryKind::default(), EntryKind::Text);
    }

    #[test]
    fn entry_uses_type_field_name() {
        let entry = TranscriptEntry::new(
            EntryKind::Heading,
            EntryContent::text("algebra"),
            Point::new(0.0, 30.0),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"heading\""));
        assert!(json.contains("\"content\":\"algebra\""));
        assert!(json.contains("\"position\":{\"x\":0.0,\"y\":30.0}"));
    }

    #[test]
    fn content_is_untagged() {
        let text = EntryContent::text("hello");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"hello\"");

        let items = EntryContent::items(vec!["red".into(), "green".into()]);
        assert_eq!(
            serde_json::to_string(&items).unwrap(),
            "[\"red\",\"green\"]"
        );
    }

    #[test]
    fn content_round_trips() {
        let items = EntryContent::items(vec!["a".into(), "".into(), "c".into()]);
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(serde_json::from_str::<EntryContent>(&json).unwrap(), items);
    }

    #[test]
    fn deserializes_browser_era_log() {
        // Positions written as integers must still load.
        let json = r#"[
            {"type":"question","content":"1. define entropy","position":{"x":12,"y":0}},
            {"type":"options","content":["a","b"],"position":{"x":12,"y":30}}
        ]"#;
        let log: Vec<TranscriptEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].kind, EntryKind::Question);
        assert_eq!(log[0].position.x, 12.0);
        assert_eq!(log[1].kind, EntryKind::Options);
        assert_eq!(
            log[1].content,
            EntryContent::items(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn as_text_only_for_text_content() {
        assert_eq!(EntryContent::text("x").as_text(), Some("x"));
        assert_eq!(EntryContent::items(vec!["x".into()]).as_text(), None);
    }
}
