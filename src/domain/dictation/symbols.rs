//! Spoken-phrase symbol tables

/// A table of spoken phrases and the symbols they produce.
pub type SymbolTable = &'static [(&'static str, &'static str)];

/// Spoken punctuation vocabulary. Phrases are lowercase and unique;
/// multi-word phrases must win over their single-word prefixes, which the
/// normalizer guarantees by matching longest-first.
pub const PUNCTUATION: SymbolTable = &[
    ("comma", ","),
    ("period", "."),
    ("full stop", "."),
    ("exclamation mark", "!"),
    ("exclamation point", "!"),
    ("question mark", "?"),
    ("colon", ":"),
    ("semicolon", ";"),
    ("dash", "-"),
    ("hyphen", "-"),
    ("open parentheses", "("),
    ("close parentheses", ")"),
    ("open bracket", "["),
    ("close bracket", "]"),
    ("open brace", "{"),
    ("close brace", "}"),
    ("quote", "\""),
    ("double quote", "\""),
    ("single quote", "'"),
    ("apostrophe", "'"),
    ("slash", "/"),
    ("backslash", "\\"),
    ("underscore", "_"),
];

/// Spoken math vocabulary, applied after the punctuation pass.
pub const MATH: SymbolTable = &[
    ("plus", "+"),
    ("minus", "-"),
    ("times", "×"),
    ("multiplied by", "×"),
    ("divided by", "÷"),
    ("equals", "="),
    ("greater than", ">"),
    ("less than", "<"),
    ("square root of", "√"),
    ("pi", "π"),
    ("theta", "θ"),
    ("alpha", "α"),
    ("beta", "β"),
    ("percent", "%"),
];

/// How a substituted symbol attaches to its neighbouring words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// Hugs the following word: `(` `[` `{`
    Opening,
    /// Hugs the preceding word: `)` `]` `}` and sentence punctuation
    Closing,
    /// Keeps the spacing it was spoken with
    Freestanding,
}

/// Look up the symbol for a spoken phrase, ignoring ASCII case.
pub fn symbol_for(table: SymbolTable, spoken: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(phrase, _)| phrase.eq_ignore_ascii_case(spoken))
        .map(|(_, symbol)| *symbol)
}

/// Attachment class of a substituted symbol.
pub fn attachment(symbol: &str) -> Attachment {
    match symbol {
        "(" | "[" | "{" => Attachment::Opening,
        ")" | "]" | "}" | "," | "." | "!" | "?" | ":" | ";" => Attachment::Closing,
        _ => Attachment::Freestanding,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(symbol_for(PUNCTUATION, "Comma"), Some(","));
        assert_eq!(symbol_for(PUNCTUATION, "FULL STOP"), Some("."));
        assert_eq!(symbol_for(MATH, "Divided By"), Some("÷"));
    }

    #[test]
    fn lookup_unknown_phrase() {
        assert_eq!(symbol_for(PUNCTUATION, "ellipsis"), None);
        assert_eq!(symbol_for(MATH, "integral"), None);
    }

    #[test]
    fn hyphen_and_dash_share_a_symbol() {
        assert_eq!(symbol_for(PUNCTUATION, "hyphen"), Some("-"));
        assert_eq!(symbol_for(PUNCTUATION, "dash"), Some("-"));
    }

    #[test]
    fn phrases_are_unique_per_table() {
        for table in [PUNCTUATION, MATH] {
            let mut seen = HashSet::new();
            for (phrase, _) in table {
                assert!(seen.insert(*phrase), "duplicate phrase: {phrase}");
            }
        }
    }

    #[test]
    fn phrases_are_lowercase_and_trimmed() {
        for (phrase, _) in PUNCTUATION.iter().chain(MATH.iter()) {
            assert_eq!(*phrase, phrase.trim().to_lowercase());
            assert!(!phrase.is_empty());
        }
    }

    #[test]
    fn symbols_are_non_empty() {
        for (_, symbol) in PUNCTUATION.iter().chain(MATH.iter()) {
            assert!(!symbol.is_empty());
        }
    }

    #[test]
    fn attachment_classes() {
        assert_eq!(attachment("("), Attachment::Opening);
        assert_eq!(attachment("["), Attachment::Opening);
        assert_eq!(attachment(")"), Attachment::Closing);
        assert_eq!(attachment(","), Attachment::Closing);
        assert_eq!(attachment("."), Attachment::Closing);
        assert_eq!(attachment("-"), Attachment::Freestanding);
        assert_eq!(attachment("\""), Attachment::Freestanding);
        assert_eq!(attachment("+"), Attachment::Freestanding);
        assert_eq!(attachment("π"), Attachment::Freestanding);
    }
}
