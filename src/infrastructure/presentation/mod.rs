//! Presentation adapters

mod console;

pub use console::ConsoleSink;
