//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the interactive
//! console, and the main application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod console;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_clear, run_session, run_show, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RunOptions};
pub use presenter::Presenter;
