//! Input parsing for PreToolUse hook invocations.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hook input is not a JSON object")]
    NotAnObject,
}

/// The raw input from the hook host.
///
/// Only `tool_input` is consulted for decisions. The other fields feed the
/// audit log when the host sends them as strings, and are dropped otherwise.
#[derive(Debug, Clone)]
pub struct HookInput {
    /// The tool being invoked (e.g., "Bash", "Read", "Edit").
    pub tool_name: Option<String>,

    /// The tool's input parameters as raw JSON.
    pub tool_input: Value,

    /// Current working directory (optional).
    pub cwd: Option<String>,

    /// Session ID for audit logging (optional).
    pub session_id: Option<String>,
}

impl HookInput {
    /// Parse from JSON string.
    ///
    /// Goes through an untyped map: duplicate keys keep the last value and
    /// a field of unexpected type never rejects the payload.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        let Value::Object(mut map) = serde_json::from_str::<Value>(json)? else {
            return Err(InputError::NotAnObject);
        };
        Ok(Self {
            tool_name: string_field(&map, "tool_name"),
            cwd: string_field(&map, "cwd"),
            session_id: string_field(&map, "session_id"),
            tool_input: map.remove("tool_input").unwrap_or(Value::Null),
        })
    }

    /// The target path of a file tool, if present and non-empty.
    pub fn file_path(&self) -> Option<&str> {
        self.str_field("file_path")
    }

    /// The shell command of a Bash tool, if present and non-empty.
    pub fn command(&self) -> Option<&str> {
        self.str_field("command")
    }

    // Non-objects, non-strings and "" all read as absent.
    fn str_field(&self, key: &str) -> Option<&str> {
        self.tool_input
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(String::from)
}
