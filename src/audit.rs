//! Audit logging for guard decisions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::decision::Decision;
use crate::guards::Guard;
use crate::input::HookInput;

const SUMMARY_MAX_LEN: usize = 200;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Session ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Guard that made the decision.
    pub guard: Guard,
    /// Tool that was invoked, when the host names it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Whether the operation was blocked.
    pub blocked: bool,
    /// Rule that triggered the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Denial message (if blocked).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Summary of the operation (command or path).
    pub summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from hook input and decision.
    pub fn new(guard: Guard, input: &HookInput, decision: &Decision) -> Self {
        let (rule, reason) = match decision.block_info() {
            Some(info) => (Some(info.rule.clone()), Some(info.message.clone())),
            None => (None, None),
        };

        let subject = match guard {
            Guard::Archive => input.file_path(),
            Guard::DevServer => input.command(),
        };
        let summary = subject
            .map(|s| truncate_string(s, SUMMARY_MAX_LEN))
            .unwrap_or_else(|| "<unknown>".to_string());

        Self {
            timestamp: Utc::now(),
            session_id: input.session_id.clone(),
            guard,
            tool: input.tool_name.clone(),
            blocked: decision.is_blocked(),
            rule,
            reason,
            summary,
        }
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len - 3;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a decision for an input.
    pub fn log_decision(
        &mut self,
        guard: Guard,
        input: &HookInput,
        decision: &Decision,
    ) -> std::io::Result<()> {
        let entry = AuditEntry::new(guard, input, decision);
        self.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_audit_entry_allow() {
        let input =
            HookInput::parse(r#"{"tool_name":"Bash","tool_input":{"command":"npm test"}}"#)
                .unwrap();
        let entry = AuditEntry::new(Guard::DevServer, &input, &Decision::allow());

        assert_eq!(entry.tool.as_deref(), Some("Bash"));
        assert!(!entry.blocked);
        assert!(entry.rule.is_none());
        assert_eq!(entry.summary, "npm test");
    }

    #[test]
    fn test_audit_entry_block() {
        let input = HookInput::parse(
            r#"{"session_id":"s1","tool_input":{"file_path":"archived/a.md"}}"#,
        )
        .unwrap();
        let decision = Decision::block("archive.dir", "denied");
        let entry = AuditEntry::new(Guard::Archive, &input, &decision);

        assert!(entry.blocked);
        assert_eq!(entry.session_id.as_deref(), Some("s1"));
        assert_eq!(entry.rule.as_deref(), Some("archive.dir"));
        assert_eq!(entry.reason.as_deref(), Some("denied"));
        assert_eq!(entry.summary, "archived/a.md");
    }

    #[test]
    fn test_audit_entry_without_subject() {
        let input = HookInput::parse("{}").unwrap();
        let entry = AuditEntry::new(Guard::Archive, &input, &Decision::allow());
        assert_eq!(entry.summary, "<unknown>");
    }

    #[test]
    fn test_audit_logger() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut logger = AuditLogger::open(temp_file.path()).unwrap();

        let input = HookInput::parse(r#"{"tool_input":{"command":"pwd"}}"#).unwrap();
        logger
            .log_decision(Guard::DevServer, &input, &Decision::allow())
            .unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"guard\":\"dev-server\""));
        assert!(content.contains("\"blocked\":false"));
        assert!(!content.contains("\"tool\""));
    }

    #[test]
    fn test_truncate_summary() {
        let long_command = "a".repeat(300);
        let input_json = format!(r#"{{"tool_input":{{"command":"{}"}}}}"#, long_command);
        let input = HookInput::parse(&input_json).unwrap();
        let entry = AuditEntry::new(Guard::DevServer, &input, &Decision::allow());

        assert!(entry.summary.len() <= 200);
        assert!(entry.summary.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        let s = "é".repeat(150);
        let truncated = truncate_string(&s, 200);
        assert!(truncated.len() <= 200);
        assert!(truncated.ends_with("..."));
    }
}
