//! Dictation domain module: symbol tables, normalizer, classifier

pub mod classifier;
pub mod normalizer;
pub mod symbols;

pub use classifier::{classify, question_number, Keyword, KEYWORD_PRIORITY};
pub use normalizer::normalize;
