//! Selection of transcript entries from decoded records

use tracing::trace;

use crate::normalize::truncate_chars;
use crate::types::{LineType, Record};

/// Default character limit for a transcript entry
pub const DEFAULT_ENTRY_CHARS: usize = 5000;

/// Default character limit for a thinking entry
pub const DEFAULT_THINKING_CHARS: usize = 2000;

/// One printable user or assistant turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: &'static str,
    pub text: String,
}

/// One printable thinking block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingEntry {
    pub text: String,
}

/// Counters for a single extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Lines decoded successfully
    pub records: usize,
    /// Entries written to the transcript
    pub printed: usize,
    /// Decoded records that produced no entry
    pub skipped: usize,
    /// Lines that failed to decode
    pub malformed: usize,
}

/// Build the transcript entry for a record, if it has one
///
/// Only user and assistant lines qualify, and lines whose text is blank are
/// suppressed. The text is cut to `max_chars` after normalization.
pub fn transcript_entry(record: &Record, max_chars: usize) -> Option<TranscriptEntry> {
    let role = record.line_type.role()?;
    let text = record.content.as_text();

    if text.trim().is_empty() {
        trace!(line = record.line_number, "blank message");
        return None;
    }

    Some(TranscriptEntry {
        role,
        text: truncate_chars(&text, max_chars).to_string(),
    })
}

/// Collect the non-empty thinking blocks of an assistant record
pub fn thinking_entries(record: &Record, max_chars: usize) -> Vec<ThinkingEntry> {
    if record.line_type != LineType::Assistant {
        return Vec::new();
    }

    record
        .content
        .thinking_blocks()
        .into_iter()
        .filter(|thinking| !thinking.is_empty())
        .map(|thinking| ThinkingEntry {
            text: truncate_chars(thinking, max_chars).to_string(),
        })
        .collect()
}
