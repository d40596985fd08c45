//! Terminal presentation sink

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{PresentationError, PresentationSink};
use crate::domain::transcript::{EntryContent, EntryKind, TranscriptEntry};

/// Renders the transcript to stdout, one indexed line per entry.
///
/// The index is what `:edit` takes. Styling follows the reference
/// rules: headings large-and-loud (upper-cased bold), subheadings bold,
/// titles underlined, everything else plain body text. Options print
/// one item per line under their index.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn format_entry(index: usize, entry: &TranscriptEntry) -> String {
        let label = format!("[{index}]").dimmed();
        match (&entry.kind, &entry.content) {
            (EntryKind::Heading, EntryContent::Text(text)) => {
                format!("{label} {}", text.to_uppercase().bold())
            }
            (EntryKind::Subheading, EntryContent::Text(text)) => {
                format!("{label} {}", text.bold())
            }
            (EntryKind::Title, EntryContent::Text(text)) => {
                format!("{label} {}", text.underline())
            }
            (_, EntryContent::Text(text)) => format!("{label} {text}"),
            (_, EntryContent::Items(items)) => {
                let mut lines = vec![format!("{label}")];
                for item in items {
                    lines.push(format!("      - {item}"));
                }
                lines.join("\n")
            }
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresentationSink for ConsoleSink {
    async fn render(&self, entries: &[TranscriptEntry]) -> Result<(), PresentationError> {
        println!();
        if entries.is_empty() {
            println!("{}", "(transcript is empty)".dimmed());
            return Ok(());
        }
        for (index, entry) in entries.iter().enumerate() {
            println!("{}", Self::format_entry(index, entry));
        }
        Ok(())
    }
}
