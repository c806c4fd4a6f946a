//! Content normalization: flatten message content into display text

use serde_json::Value;

use crate::literal::py_str;
use crate::types::{ContentBlock, MessageContent};

/// Characters of a thinking block shown in the normalized preview
pub const THINKING_PREVIEW_CHARS: usize = 100;

/// Flatten message content into a single display string
///
/// Plain text is returned unchanged, block arrays are rendered block by block
/// and joined with `\n`, and any other value is stringified as a literal.
pub fn normalize(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => blocks
            .iter()
            .filter_map(block_text)
            .collect::<Vec<_>>()
            .join("\n"),
        MessageContent::Opaque(value) => py_str(value),
    }
}

/// Normalize a raw `content` value
pub fn normalize_value(content: &Value) -> String {
    normalize(&MessageContent::from_value(content.clone()))
}

/// Text contributed by one block, `None` for blocks left out of the join
pub fn block_text(block: &ContentBlock) -> Option<String> {
    match block {
        ContentBlock::Text { text } => Some(text.clone()),
        // The "..." marker is appended whether or not the preview was cut
        ContentBlock::Thinking { thinking } => Some(format!(
            "[Thinking: {}...]",
            truncate_chars(thinking, THINKING_PREVIEW_CHARS)
        )),
        ContentBlock::ToolUse { name, input } => {
            Some(format!("[Tool call: {} {}]", name, py_str(input)))
        }
        ContentBlock::Other => None,
    }
}

/// Keep at most `max_chars` characters, never splitting a char
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

impl MessageContent {
    /// Extract display text from message content
    pub fn as_text(&self) -> String {
        normalize(self)
    }
}
