//! Plain-text rendering of transcript entries
//!
//! Each entry renders as a header line, its text, and a trailing blank line.

use std::fmt;

use crate::extract::{ThinkingEntry, TranscriptEntry};

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.role)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

impl fmt::Display for ThinkingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== THINKING ===")?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_entry_layout() {
        let entry = TranscriptEntry {
            role: "User",
            text: "Hello\nworld".to_string(),
        };
        assert_eq!(entry.to_string(), "=== User ===\nHello\nworld\n\n");
    }

    #[test]
    fn test_thinking_entry_layout() {
        let entry = ThinkingEntry {
            text: "pondering".to_string(),
        };
        assert_eq!(entry.to_string(), "=== THINKING ===\npondering\n\n");
    }
}
