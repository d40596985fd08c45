//! Interpreter integration tests: normalizer and classifier properties

use exam_scribe::domain::dictation::{classify, normalize, symbols};
use exam_scribe::domain::transcript::{EntryContent, EntryKind, Point, TranscriptEntry};

const ORIGIN: Point = Point::new(0.0, 0.0);

#[test]
fn spoken_phrases_never_survive_substitution() {
    for (phrase, symbol) in symbols::PUNCTUATION.iter().chain(symbols::MATH.iter()) {
        let utterance = format!("left {phrase} right");
        let normalized = normalize(&utterance);
        assert!(
            normalized.contains(symbol),
            "'{phrase}' should become '{symbol}', got '{normalized}'"
        );
        assert!(
            !normalized.to_lowercase().contains(phrase),
            "'{phrase}' leaked through: '{normalized}'"
        );
    }
}

#[test]
fn parentheses_hug_their_content() {
    assert_eq!(
        normalize("open parentheses hello close parentheses"),
        "(hello)"
    );
}

#[test]
fn heading_utterance_produces_heading_entry() {
    let (entry, _) = classify(&normalize("Heading Introduction"), ORIGIN, &[], 1);
    assert_eq!(entry.kind, EntryKind::Heading);
    assert_eq!(entry.content, EntryContent::text("Introduction"));
}

#[test]
fn question_numbering_spans_both_keywords() {
    let normalized = normalize("Questions what is two plus two");
    let (first, counter) = classify(&normalized, ORIGIN, &[], 1);
    assert_eq!(first.kind, EntryKind::Question);
    assert_eq!(first.content, EntryContent::text("1. what is two + two"));

    let log = vec![first];
    let normalized = normalize("Next question what is pi");
    let (second, counter) = classify(&normalized, ORIGIN, &log, counter);
    assert_eq!(second.kind, EntryKind::NextQuestion);
    assert_eq!(second.content, EntryContent::text("2. what is π"));
    assert_eq!(counter, 3);
}

#[test]
fn options_are_split_and_trimmed() {
    let (entry, _) = classify("Options red, green , blue", ORIGIN, &[], 1);
    assert_eq!(
        entry.content,
        EntryContent::items(vec!["red".into(), "green".into(), "blue".into()])
    );
}

#[test]
fn positions_form_an_arithmetic_sequence() {
    let mut log: Vec<TranscriptEntry> = Vec::new();
    for i in 0..5 {
        let (entry, _) = classify(&format!("line {i}"), ORIGIN, &log, 1);
        log.push(entry);
    }
    for (i, entry) in log.iter().enumerate() {
        assert_eq!(entry.position.y, 30.0 * i as f64);
    }
}

#[test]
fn whitespace_only_utterances_are_harmless() {
    let (entry, counter) = classify(&normalize("   "), ORIGIN, &[], 9);
    assert_eq!(entry.kind, EntryKind::Text);
    assert_eq!(entry.content, EntryContent::text(""));
    assert_eq!(counter, 9);
}

#[test]
fn title_is_title_cased() {
    let (entry, _) = classify(&normalize("title physics midterm"), ORIGIN, &[], 1);
    assert_eq!(entry.kind, EntryKind::Title);
    assert_eq!(entry.content, EntryContent::text("Physics Midterm"));
}
