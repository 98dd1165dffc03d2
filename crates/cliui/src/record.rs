//! Message recording for tests
//!
//! While recording, every message keeps a copy of its plain rendering so
//! tests can search what was printed without capturing the real streams.

use regex::Regex;

use crate::error::Result;

#[derive(Debug, Default)]
/// Keeps plain copies of messages so tests can search them
pub struct MessageRecorder {
    active: bool,
    messages: Vec<String>,
}

impl MessageRecorder {
    /// An idle recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording messages
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop recording and forget recorded messages
    pub fn stop(&mut self) {
        self.active = false;
        self.messages.clear();
    }

    /// Forget recorded messages, keep recording
    pub fn reset(&mut self) {
        self.messages.clear();
    }

    /// Whether messages are being recorded
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Store a plain message if recording
    pub fn record(&mut self, plain: &str) {
        if self.active {
            self.messages.push(plain.to_string());
        }
    }

    /// Recorded messages, oldest first
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// First recorded message matching the regular expression `pattern`
    pub fn find(&self, pattern: &str) -> Result<Option<&str>> {
        let re = Regex::new(pattern)?;
        Ok(self
            .messages
            .iter()
            .find(|m| re.is_match(m))
            .map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_only_when_active() {
        let mut recorder = MessageRecorder::new();
        recorder.record("before");
        assert!(recorder.messages().is_empty());

        recorder.start();
        recorder.record("during");
        assert_eq!(recorder.messages(), ["during"]);
    }

    #[test]
    fn test_find_and_reset() {
        let mut recorder = MessageRecorder::new();
        recorder.start();
        recorder.record(":: This is foo\n");
        assert_eq!(recorder.find("fo+").unwrap(), Some(":: This is foo\n"));

        recorder.reset();
        recorder.record(":: This is bar\n");
        assert_eq!(recorder.find("foo").unwrap(), None);
        assert!(recorder.find("bar").unwrap().is_some());
    }

    #[test]
    fn test_stop_clears() {
        let mut recorder = MessageRecorder::new();
        recorder.start();
        recorder.record("x");
        recorder.stop();
        assert!(!recorder.is_active());
        assert!(recorder.messages().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let recorder = MessageRecorder::new();
        assert!(recorder.find("(unclosed").is_err());
    }
}
