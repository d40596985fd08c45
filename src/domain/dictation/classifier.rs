//! Leading-keyword classification of normalized utterances

use crate::domain::transcript::{EntryContent, EntryKind, Point, TranscriptEntry, LINE_HEIGHT};

use super::normalizer::{capitalize_after_period, capitalize_words};

/// Keywords in match priority order; the first prefix match wins.
pub const KEYWORD_PRIORITY: &[Keyword] = &[
    Keyword::Heading,
    Keyword::Subheading,
    Keyword::Questions,
    Keyword::NextQuestion,
    Keyword::Options,
    Keyword::Title,
];

/// Leading keywords recognised at the start of a normalized utterance.
/// Matching is case-sensitive, which is what makes them reachable at all:
/// normalization upper-cases the first character of the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Heading,
    Subheading,
    Questions,
    NextQuestion,
    Options,
    Title,
}

impl Keyword {
    /// The spoken form matched against the utterance
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Subheading => "Subheading",
            Self::Questions => "Questions",
            Self::NextQuestion => "Next question",
            Self::Options => "Options",
            Self::Title => "Title",
        }
    }

    /// Entry kind produced by this keyword
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Heading => EntryKind::Heading,
            Self::Subheading => EntryKind::Subheading,
            Self::Questions => EntryKind::Question,
            Self::NextQuestion => EntryKind::NextQuestion,
            Self::Options => EntryKind::Options,
            Self::Title => EntryKind::Title,
        }
    }
}

/// Classify one normalized utterance into a transcript entry.
///
/// `cursor` is the most recent pointer position, `log` the transcript so
/// far, and `question_counter` the next question number. Returns the entry
/// together with the counter value after it; only `Questions` and
/// `Next question` advance the counter. Total over any input.
pub fn classify(
    normalized: &str,
    cursor: Point,
    log: &[TranscriptEntry],
    question_counter: u32,
) -> (TranscriptEntry, u32) {
    let position = next_position(cursor, log);
    for keyword in KEYWORD_PRIORITY {
        if let Some(rest) = normalized.strip_prefix(keyword.as_str()) {
            return keyword_entry(*keyword, rest.trim(), position, question_counter);
        }
    }
    let entry = TranscriptEntry::new(EntryKind::Text, EntryContent::text(normalized), position);
    (entry, question_counter)
}

/// Parse the leading "N." label of a numbered question's content.
pub fn question_number(content: &str) -> Option<u32> {
    let (label, _) = content.split_once('.')?;
    label.trim().parse().ok()
}

// x tracks the cursor, y chains one line below the last entry.
fn next_position(cursor: Point, log: &[TranscriptEntry]) -> Point {
    let y = log
        .last()
        .map(|entry| entry.position.y + LINE_HEIGHT)
        .unwrap_or(0.0);
    Point::new(cursor.x, y)
}

fn keyword_entry(
    keyword: Keyword,
    body: &str,
    position: Point,
    question_counter: u32,
) -> (TranscriptEntry, u32) {
    let kind = keyword.kind();
    match keyword {
        Keyword::Heading => (
            TranscriptEntry::new(kind, EntryContent::text(body), position),
            question_counter,
        ),
        Keyword::Subheading | Keyword::Title => (
            TranscriptEntry::new(kind, EntryContent::text(capitalize_words(body)), position),
            question_counter,
        ),
        Keyword::Questions | Keyword::NextQuestion => {
            let content = format!("{question_counter}. {}", capitalize_after_period(body));
            (
                TranscriptEntry::new(kind, EntryContent::text(content), position),
                question_counter + 1,
            )
        }
        Keyword::Options => {
            let items = body.split(',').map(|item| item.trim().to_string()).collect();
            (
                TranscriptEntry::new(kind, EntryContent::items(items), position),
                question_counter,
            )
        }
    }
}
