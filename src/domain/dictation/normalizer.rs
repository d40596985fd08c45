//! Utterance normalization: spoken-symbol substitution and capitalization

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::symbols::{self, Attachment, SymbolTable};

static PUNCTUATION_PATTERN: Lazy<Regex> = Lazy::new(|| phrase_pattern(symbols::PUNCTUATION));
static MATH_PATTERN: Lazy<Regex> = Lazy::new(|| phrase_pattern(symbols::MATH));

/// Normalize a finalized utterance: trim, substitute spoken punctuation,
/// then spoken math, then upper-case the first character. Total over any
/// input.
pub fn normalize(raw: &str) -> String {
    let substituted = substitute_math(&substitute_punctuation(raw.trim()));
    capitalize_first(&substituted)
}

/// Replace spoken punctuation phrases with their symbols.
pub fn substitute_punctuation(text: &str) -> String {
    substitute(&PUNCTUATION_PATTERN, symbols::PUNCTUATION, text)
}

/// Replace spoken math phrases with their symbols. Runs after the
/// punctuation pass so phrases like "minus" never shadow punctuation.
pub fn substitute_math(text: &str) -> String {
    substitute(&MATH_PATTERN, symbols::MATH, text)
}

/// Whole-word, case-insensitive phrase matcher over a symbol table.
/// Alternatives are ordered longest-first so the longest phrase wins at
/// any given position under leftmost-first alternation.
fn phrase_pattern(table: SymbolTable) -> Regex {
    let mut phrases: Vec<&str> = table.iter().map(|(phrase, _)| *phrase).collect();
    phrases.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation: Vec<String> = phrases.iter().map(|p| regex::escape(p)).collect();
    let pattern = format!(r"(?i)(\s*)\b({})\b(\s*)", alternation.join("|"));
    Regex::new(&pattern).expect("symbol tables form a valid pattern")
}

fn substitute(pattern: &Regex, table: SymbolTable, text: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let symbol = match symbols::symbol_for(table, &caps[2]) {
                Some(symbol) => symbol,
                None => return caps[0].to_string(),
            };
            let (lead, trail) = (&caps[1], &caps[3]);
            match symbols::attachment(symbol) {
                Attachment::Opening => format!("{lead}{symbol}"),
                Attachment::Closing => format!("{symbol}{trail}"),
                Attachment::Freestanding => format!("{lead}{symbol}{trail}"),
            }
        })
        .into_owned()
}

/// Upper-case the first character of the text.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case every alphanumeric character that starts a word run.
/// Underscores join words, so "world_foo" capitalizes only the "w".
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && at_word_start {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        at_word_start = !is_word;
    }
    result
}

/// Upper-case any lowercase letter that directly follows ". ".
pub fn capitalize_after_period(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;
    for ch in text.chars() {
        if ch.is_lowercase() && prev == Some(' ') && before_prev == Some('.') {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        before_prev = prev;
        prev = Some(ch);
    }
    result
}
