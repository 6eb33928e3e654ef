//! Uniform tool response envelope.
//!
//! Every tool call, successful or not, is answered with exactly one
//! [`Envelope`] holding exactly one text item. Success values are rendered as
//! pretty JSON (or verbatim when already a string), failures as
//! `"Error: <message>"`.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub content: Vec<TextContent>,
    #[serde(rename = "isError", default)]
    pub is_error: bool,
}

impl Envelope {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![TextContent {
                kind: ContentKind::Text,
                text,
            }],
            is_error,
        }
    }

    /// Text of the single content item.
    pub fn as_text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or_default()
    }
}

/// Wrap a success value. Strings pass through untouched; anything else is
/// rendered as indented JSON with sorted keys.
pub fn format_success<T: Serialize + ?Sized>(value: &T) -> Envelope {
    // Going through `Value` sorts object keys (BTreeMap-backed map).
    let value = match serde_json::to_value(value) {
        Ok(v) => v,
        Err(e) => return format_failure(e),
    };
    match value {
        JsonValue::String(s) => Envelope::text(s, false),
        other => match serde_json::to_string_pretty(&other) {
            Ok(text) => Envelope::text(text, false),
            Err(e) => format_failure(e),
        },
    }
}

/// Wrap an error as `"Error: <message>"`.
pub fn format_failure(error: impl Display) -> Envelope {
    Envelope::text(format!("Error: {error}"), true)
}

/// Best-effort message extraction from a structured error body.
pub fn error_message(value: &JsonValue) -> String {
    for field in ["message", "error"] {
        if let Some(msg) = value.get(field).and_then(|v| v.as_str()) {
            return msg.to_owned();
        }
    }
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Envelope> for CallToolResult {
    fn from(envelope: Envelope) -> Self {
        let content: Vec<Content> = envelope
            .content
            .into_iter()
            .map(|item| Content::text(item.text))
            .collect();
        if envelope.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}
