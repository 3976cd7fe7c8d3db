//! Dev-server command detection.

use super::{Guard, check_deny_rules};
use crate::config::CompiledConfig;
use crate::decision::{BlockInfo, Decision};

/// Collapse every whitespace run to a single space.
///
/// The information separators U+001C..U+001F count as whitespace too.
pub fn normalize_command(command: &str) -> String {
    command
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Check a shell command against the dev-server rules.
///
/// Matching is by substring, so `npm run develop` is caught by `npm run dev`.
pub fn check_dev_server(command: &str, config: &CompiledConfig) -> Decision {
    let normalized = normalize_command(command);

    let matched = config
        .raw
        .dev_server
        .blocked_commands
        .iter()
        .find(|blocked| normalized.contains(blocked.as_str()));

    if let Some(blocked) = matched {
        return Decision::Block(
            BlockInfo::new(
                "dev_server.command",
                format!("Access denied: '{}' is blocked.", blocked),
            )
            .with_hint("Please run the dev server manually if needed."),
        );
    }

    check_deny_rules(Guard::DevServer, &normalized, config)
}
