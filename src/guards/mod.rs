//! Guard entry points.

mod archive;
mod dev_server;

pub use archive::{check_archive, normalize_path};
pub use dev_server::{check_dev_server, normalize_command};

use serde::{Deserialize, Serialize};

use crate::config::CompiledConfig;
use crate::decision::{BlockInfo, Decision};
use crate::input::HookInput;

/// The guards shipped by this crate, one binary each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Guard {
    /// Blocks file operations on archived paths.
    Archive,
    /// Blocks shell commands that start a dev server.
    DevServer,
}

impl Guard {
    /// Name used in config files and audit entries.
    pub fn name(self) -> &'static str {
        match self {
            Guard::Archive => "archive",
            Guard::DevServer => "dev-server",
        }
    }

    /// Decide on a parsed invocation.
    pub fn decide(self, input: &HookInput, config: &CompiledConfig) -> Decision {
        match self {
            Guard::Archive => match input.file_path() {
                Some(path) => check_archive(path, config),
                None => Decision::allow(),
            },
            Guard::DevServer => match input.command() {
                Some(command) => check_dev_server(command, config),
                None => Decision::allow(),
            },
        }
    }
}

/// Block with a config deny rule if one matches.
fn check_deny_rules(guard: Guard, subject: &str, config: &CompiledConfig) -> Decision {
    match config.matching_deny_rule(guard, subject) {
        Some(rule) => Decision::Block(
            BlockInfo::new(
                format!("{}.deny", guard.name()),
                format!("Access denied: '{}' matches a deny rule.", subject),
            )
            .with_hint(&rule.reason),
        ),
        None => Decision::allow(),
    }
}
