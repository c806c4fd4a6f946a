//! Core type definitions for transcript records

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::literal::{py_str, py_truthy};

/// Line type in a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    User,
    Assistant,
    FileHistorySnapshot,
    Unknown,
}

impl LineType {
    /// Classify the top-level `type` field of a line
    pub fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("user") => LineType::User,
            Some("assistant") => LineType::Assistant,
            Some("file-history-snapshot") => LineType::FileHistorySnapshot,
            _ => LineType::Unknown,
        }
    }

    /// Role header for conversational lines
    pub fn role(&self) -> Option<&'static str> {
        match self {
            LineType::User => Some("User"),
            LineType::Assistant => Some("Assistant"),
            LineType::FileHistorySnapshot | LineType::Unknown => None,
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineType::User => write!(f, "user"),
            LineType::Assistant => write!(f, "assistant"),
            LineType::FileHistorySnapshot => write!(f, "file-history-snapshot"),
            LineType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Content block types that can appear in messages
///
/// Built by inspecting the block's shape rather than a strict deserialize, so
/// blocks with missing fields or an unexpected `type` never fail a line.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Thinking {
        thinking: String,
    },
    ToolUse {
        name: String,
        input: Value,
    },
    /// Unrecognized `type`, or an element that is not an object
    Other,
}

impl ContentBlock {
    pub fn from_value(value: &Value) -> Self {
        let Some(block) = value.as_object() else {
            return ContentBlock::Other;
        };

        match block.get("type").and_then(Value::as_str) {
            Some("text") => ContentBlock::Text {
                text: field_text(block, "text"),
            },
            Some("thinking") => ContentBlock::Thinking {
                thinking: block
                    .get("thinking")
                    .filter(|thinking| py_truthy(thinking))
                    .map(py_str)
                    .unwrap_or_default(),
            },
            Some("tool_use") => ContentBlock::ToolUse {
                // A missing name renders like an explicit null
                name: block
                    .get("name")
                    .map(py_str)
                    .unwrap_or_else(|| "None".to_string()),
                input: block
                    .get("input")
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new())),
            },
            _ => ContentBlock::Other,
        }
    }
}

/// Missing and null fields read as empty; other non-strings are stringified
fn field_text(block: &Map<String, Value>, key: &str) -> String {
    match block.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(value) => py_str(value),
    }
}

/// Message content can be a string, an array of content blocks, or anything else
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Opaque(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl MessageContent {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => MessageContent::Text(text),
            Value::Array(items) => {
                MessageContent::Blocks(items.iter().map(ContentBlock::from_value).collect())
            }
            other => MessageContent::Opaque(other),
        }
    }

    /// Get the raw text of thinking blocks, in order
    pub fn thinking_blocks(&self) -> Vec<&str> {
        let mut thinking = Vec::new();
        if let MessageContent::Blocks(blocks) = self {
            for block in blocks {
                if let ContentBlock::Thinking { thinking: text } = block {
                    thinking.push(text.as_str());
                }
            }
        }
        thinking
    }
}

/// Envelope of a transcript line; only the fields the extractors consume
///
/// Deserialize it from an already decoded `Value`: a repeated key then keeps
/// its last value instead of failing the line.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedLine {
    #[serde(rename = "type", default)]
    pub line_type: Value,
    #[serde(default)]
    pub message: Value,
}

/// A single decoded line from a session file
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Line number in the file (1-indexed)
    pub line_number: usize,
    pub line_type: LineType,
    /// `message.content`, empty text when the line carries no message
    pub content: MessageContent,
}

impl Record {
    pub fn from_parsed(parsed: ParsedLine, line_number: usize) -> Self {
        let content = match parsed.message {
            Value::Object(mut message) => message
                .remove("content")
                .map(MessageContent::from_value)
                .unwrap_or_default(),
            _ => MessageContent::default(),
        };

        Self {
            line_number,
            line_type: LineType::from_value(&parsed.line_type),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_type_classification() {
        assert_eq!(LineType::from_value(&json!("user")), LineType::User);
        assert_eq!(LineType::from_value(&json!("assistant")), LineType::Assistant);
        assert_eq!(
            LineType::from_value(&json!("file-history-snapshot")),
            LineType::FileHistorySnapshot
        );
        assert_eq!(LineType::from_value(&json!("summary")), LineType::Unknown);
        assert_eq!(LineType::from_value(&json!(42)), LineType::Unknown);
        assert_eq!(LineType::from_value(&Value::Null), LineType::Unknown);
    }

    #[test]
    fn test_roles() {
        assert_eq!(LineType::User.role(), Some("User"));
        assert_eq!(LineType::Assistant.role(), Some("Assistant"));
        assert_eq!(LineType::FileHistorySnapshot.role(), None);
        assert_eq!(LineType::Unknown.role(), None);
    }

    #[test]
    fn test_content_shapes() {
        assert_eq!(
            MessageContent::from_value(json!("hello")),
            MessageContent::Text("hello".to_string())
        );
        assert_eq!(
            MessageContent::from_value(json!([])),
            MessageContent::Blocks(Vec::new())
        );
        assert_eq!(
            MessageContent::from_value(json!(5)),
            MessageContent::Opaque(json!(5))
        );
        assert_eq!(
            MessageContent::from_value(json!({"text": "x"})),
            MessageContent::Opaque(json!({"text": "x"}))
        );
    }

    #[test]
    fn test_block_defaults() {
        assert_eq!(
            ContentBlock::from_value(&json!({"type": "text"})),
            ContentBlock::Text { text: String::new() }
        );
        assert_eq!(
            ContentBlock::from_value(&json!({"type": "thinking", "thinking": null})),
            ContentBlock::Thinking { thinking: String::new() }
        );
        assert_eq!(
            ContentBlock::from_value(&json!({"type": "tool_use", "name": "Bash"})),
            ContentBlock::ToolUse {
                name: "Bash".to_string(),
                input: json!({}),
            }
        );
    }

    #[test]
    fn test_tool_use_without_name() {
        for block in [
            json!({"type": "tool_use", "input": {"a": 1}}),
            json!({"type": "tool_use", "name": null, "input": {"a": 1}}),
        ] {
            assert_eq!(
                ContentBlock::from_value(&block),
                ContentBlock::ToolUse {
                    name: "None".to_string(),
                    input: json!({"a": 1}),
                }
            );
        }
    }

    #[test]
    fn test_falsy_thinking_reads_as_empty() {
        for value in [json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert_eq!(
                ContentBlock::from_value(&json!({"type": "thinking", "thinking": value})),
                ContentBlock::Thinking { thinking: String::new() },
                "{}",
                value
            );
        }
        assert_eq!(
            ContentBlock::from_value(&json!({"type": "thinking", "thinking": 7})),
            ContentBlock::Thinking { thinking: "7".to_string() }
        );
    }

    #[test]
    fn test_unrecognized_blocks() {
        assert_eq!(ContentBlock::from_value(&json!("text")), ContentBlock::Other);
        assert_eq!(ContentBlock::from_value(&json!(["text"])), ContentBlock::Other);
        assert_eq!(
            ContentBlock::from_value(&json!({"type": "tool_result", "content": "ok"})),
            ContentBlock::Other
        );
        assert_eq!(ContentBlock::from_value(&json!({"text": "untyped"})), ContentBlock::Other);
    }

    #[test]
    fn test_non_string_text_field_is_stringified() {
        assert_eq!(
            ContentBlock::from_value(&json!({"type": "text", "text": 12})),
            ContentBlock::Text { text: "12".to_string() }
        );
    }

    #[test]
    fn test_thinking_blocks() {
        let content = MessageContent::from_value(json!([
            {"type": "thinking", "thinking": "first"},
            {"type": "text", "text": "answer"},
            {"type": "thinking", "thinking": "second"}
        ]));
        assert_eq!(content.thinking_blocks(), vec!["first", "second"]);
        assert!(MessageContent::from_value(json!("thinking")).thinking_blocks().is_empty());
    }

    #[test]
    fn test_record_without_message() {
        let parsed: ParsedLine =
            serde_json::from_str(r#"{"type":"file-history-snapshot","snapshot":{}}"#).unwrap();
        let record = Record::from_parsed(parsed, 3);
        assert_eq!(record.line_number, 3);
        assert_eq!(record.line_type, LineType::FileHistorySnapshot);
        assert_eq!(record.content, MessageContent::default());
    }

    #[test]
    fn test_record_with_non_object_message() {
        let parsed: ParsedLine =
            serde_json::from_str(r#"{"type":"user","message":"hello"}"#).unwrap();
        let record = Record::from_parsed(parsed, 1);
        assert_eq!(record.content, MessageContent::default());
    }

    #[test]
    fn test_record_with_null_content() {
        let parsed: ParsedLine =
            serde_json::from_str(r#"{"type":"user","message":{"content":null}}"#).unwrap();
        let record = Record::from_parsed(parsed, 1);
        assert_eq!(record.content, MessageContent::Opaque(Value::Null));
    }
}
