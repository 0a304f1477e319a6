//! Output abstraction layer
//!
//! Backend-agnostic interface for plain (non-TUI) output, used by the
//! `list` and `config` commands. The TUI reports through its own status bar.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use splitview::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.heading("Animals");
/// output.write("Cat");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write a section heading
    fn heading(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// ```
/// use splitview::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Configuration written");
/// ```
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn heading(&self, message: &str) {
        println!("{}", message.bold().cyan());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Section heading
    Heading,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Info message
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Normal, MessageLevel::Normal);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}
