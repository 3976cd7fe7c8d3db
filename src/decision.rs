//! Decision types for hook responses.

use serde::Serialize;

/// The result of checking a tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Allow the tool to proceed.
    Allow,
    /// Block the tool with a message.
    Block(BlockInfo),
}

/// Information about why a tool was blocked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockInfo {
    /// The rule that triggered the block.
    pub rule: String,
    /// First stderr line, the denial notice.
    pub message: String,
    /// Optional second stderr line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Decision::Block(BlockInfo::new(rule, message))
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }
}
