//! Interactive console: stdin as the utterance source and control surface
//!
//! Each plain line typed into the terminal stands in for one finalized
//! utterance from a speech engine; colon-commands drive the controls the
//! session exposes (listening toggle, edits, pointer clicks, clearing).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::ports::{UtteranceError, UtteranceSource};
use crate::application::SessionEvent;
use crate::domain::transcript::Point;

/// One parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// A finalized utterance (any line not starting with ':')
    Utterance(String),
    /// `:listen` - toggle listening
    Listen,
    /// `:clear` - wipe the transcript
    Clear,
    /// `:edit <index> <text>` - replace an entry's content
    Edit { index: usize, content: String },
    /// `:click <x> <y>` - record a pointer position
    Click { x: f64, y: f64 },
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// Blank line, ignored
    Empty,
    /// Unrecognized or malformed colon-command
    Invalid(String),
}

/// Parse one console line into a command.
pub fn parse_line(line: &str) -> ConsoleCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ConsoleCommand::Empty;
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return ConsoleCommand::Utterance(trimmed.to_string());
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "listen" => ConsoleCommand::Listen,
        "clear" => ConsoleCommand::Clear,
        "help" => ConsoleCommand::Help,
        "quit" | "q" => ConsoleCommand::Quit,
        "edit" => match rest.split_once(char::is_whitespace) {
            Some((index, content)) => match index.parse() {
                Ok(index) => ConsoleCommand::Edit {
                    index,
                    content: content.trim().to_string(),
                },
                Err(_) => ConsoleCommand::Invalid(format!("bad index '{index}'")),
            },
            None => ConsoleCommand::Invalid("usage: :edit <index> <text>".to_string()),
        },
        "click" => {
            let mut parts = rest.split_whitespace();
            match (
                parts.next().and_then(|v| v.parse().ok()),
                parts.next().and_then(|v| v.parse().ok()),
            ) {
                (Some(x), Some(y)) => ConsoleCommand::Click { x, y },
                _ => ConsoleCommand::Invalid("usage: :click <x> <y>".to_string()),
            }
        }
        other => ConsoleCommand::Invalid(format!("unknown command ':{other}'")),
    }
}

/// The console side of the utterance source: a shared listening flag,
/// toggled by the session through the port, consulted by the reader loop.
#[derive(Clone)]
pub struct ConsoleInput {
    listening: Arc<AtomicBool>,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            listening: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The flag the reader loop gates utterances on.
    pub fn listening_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.listening)
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UtteranceSource for ConsoleInput {
    // stdin is always there; the capability probe only fails for real
    // speech engines.
    fn available(&self) -> bool {
        true
    }

    async fn start(&self) -> Result<(), UtteranceError> {
        self.listening.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<(), UtteranceError> {
        self.listening.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Read stdin until EOF or `:quit`, translating lines into session
/// events. Runs as its own task beside the session loop.
pub async fn read_loop(events: mpsc::Sender<SessionEvent>, listening: Arc<AtomicBool>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // EOF or a broken terminal both end the session
            Ok(None) | Err(_) => {
                let _ = events.send(SessionEvent::Shutdown).await;
                return;
            }
        };

        let event = match parse_line(&line) {
            ConsoleCommand::Utterance(text) => {
                // The session is the gate; this hint is only UX.
                if !listening.load(Ordering::SeqCst) {
                    eprintln!("{}", "(not listening; type :listen first)".dimmed());
                }
                SessionEvent::UtteranceFinalized(text)
            }
            ConsoleCommand::Listen => SessionEvent::ListenToggled,
            ConsoleCommand::Clear => SessionEvent::ClearRequested,
            ConsoleCommand::Edit { index, content } => {
                SessionEvent::ContentEdited { index, content }
            }
            ConsoleCommand::Click { x, y } => SessionEvent::PointerClicked(Point::new(x, y)),
            ConsoleCommand::Help => {
                print_help();
                continue;
            }
            ConsoleCommand::Quit => {
                let _ = events.send(SessionEvent::Shutdown).await;
                return;
            }
            ConsoleCommand::Empty => continue,
            ConsoleCommand::Invalid(reason) => {
                eprintln!("{} {}", "✗".red(), reason);
                continue;
            }
        };

        if events.send(event).await.is_err() {
            // session ended on its own
            return;
        }
    }
}

fn print_help() {
    eprintln!("Plain lines are dictated utterances. Commands:");
    eprintln!("  :listen            toggle listening");
    eprintln!("  :clear             wipe the transcript");
    eprintln!("  :edit <i> <text>   replace entry i's content");
    eprintln!("  :click <x> <y>     record a pointer position");
    eprintln!("  :help              this text");
    eprintln!("  :quit              end the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_utterances() {
        assert_eq!(
            parse_line("Heading algebra"),
            ConsoleCommand::Utterance("Heading algebra".to_string())
        );
        assert_eq!(
            parse_line("  trimmed  "),
            ConsoleCommand::Utterance("trimmed".to_string())
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(""), ConsoleCommand::Empty);
        assert_eq!(parse_line("   "), ConsoleCommand::Empty);
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_line(":listen"), ConsoleCommand::Listen);
        assert_eq!(parse_line(":clear"), ConsoleCommand::Clear);
        assert_eq!(parse_line(":help"), ConsoleCommand::Help);
        assert_eq!(parse_line(":quit"), ConsoleCommand::Quit);
        assert_eq!(parse_line(":q"), ConsoleCommand::Quit);
    }

    #[test]
    fn edit_command_takes_index_and_text() {
        assert_eq!(
            parse_line(":edit 2 corrected text"),
            ConsoleCommand::Edit {
                index: 2,
                content: "corrected text".to_string()
            }
        );
    }

    #[test]
    fn malformed_edit_is_invalid() {
        assert!(matches!(parse_line(":edit"), ConsoleCommand::Invalid(_)));
        assert!(matches!(
            parse_line(":edit abc text"),
            ConsoleCommand::Invalid(_)
        ));
    }

    #[test]
    fn click_command_takes_coordinates() {
        assert_eq!(
            parse_line(":click 120 44.5"),
            ConsoleCommand::Click { x: 120.0, y: 44.5 }
        );
        assert!(matches!(
            parse_line(":click 12"),
            ConsoleCommand::Invalid(_)
        ));
    }

    #[test]
    fn unknown_commands_are_invalid() {
        assert!(matches!(
            parse_line(":frobnicate"),
            ConsoleCommand::Invalid(_)
        ));
    }

    #[tokio::test]
    async fn source_toggles_the_shared_flag() {
        let input = ConsoleInput::new();
        let flag = input.listening_flag();
        assert!(!flag.load(Ordering::SeqCst));

        input.start().await.unwrap();
        assert!(flag.load(Ordering::SeqCst));

        input.stop().await.unwrap();
        assert!(!flag.load(Ordering::SeqCst));
    }
}
