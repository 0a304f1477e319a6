//! Mock output writer for testing

use super::output::{MessageLevel, OutputWriter};
use std::sync::Mutex;

/// Output writer that records every message instead of printing it
#[derive(Debug, Default)]
pub struct MockWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl MockWriter {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Only the message texts, in order
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.messages().into_iter().map(|(_, text)| text).collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

impl OutputWriter for MockWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn heading(&self, message: &str) {
        self.push(MessageLevel::Heading, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_levels_in_order() {
        let writer = MockWriter::new();
        writer.heading("Animals");
        writer.write("Cat");
        writer.error("boom");

        assert_eq!(
            writer.messages(),
            vec![
                (MessageLevel::Heading, "Animals".to_string()),
                (MessageLevel::Normal, "Cat".to_string()),
                (MessageLevel::Error, "boom".to_string()),
            ]
        );
    }
}
