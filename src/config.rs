//! Configuration loading.
//!
//! Hooks run with built-in defaults unless invoked with `--config <path>`.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::guards::Guard;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Archive guard settings.
    pub archive: ArchiveConfig,

    /// Dev-server guard settings.
    pub dev_server: DevServerConfig,

    /// Extra regex deny rules.
    pub deny: Vec<DenyRule>,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Archive guard configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Substrings marking a path as inside an archive directory.
    pub dir_markers: Vec<String>,
    /// Path suffixes marking a file as archived.
    pub suffixes: Vec<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            dir_markers: vec!["archived/".to_string()],
            suffixes: vec![".archived".to_string()],
        }
    }
}

/// Dev-server guard configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Substrings of a whitespace-collapsed command that start a dev server.
    pub blocked_commands: Vec<String>,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            blocked_commands: vec!["npm run dev".to_string()],
        }
    }
}

/// Explicit deny rule.
#[derive(Debug, Clone, Deserialize)]
pub struct DenyRule {
    /// Guard the rule applies to.
    pub guard: Guard,
    /// Regex matched against the normalized path or command.
    pub pattern: String,
    /// Human-readable reason for blocking.
    pub reason: String,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// Compiled configuration with pre-built regexes.
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Compiled deny rules.
    pub deny_patterns: Vec<(DenyRule, Regex)>,
}

impl Config {
    /// Load configuration from an explicit path, or defaults when none is given.
    ///
    /// A path that does not exist also yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Compile all regex patterns for faster matching.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let deny_patterns = self
            .deny
            .iter()
            .map(|rule| {
                let re = Regex::new(&rule.pattern).map_err(|e| ConfigError::Regex {
                    pattern: rule.pattern.clone(),
                    source: e,
                })?;
                Ok((rule.clone(), re))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(CompiledConfig {
            raw: self,
            deny_patterns,
        })
    }
}

impl CompiledConfig {
    /// First deny rule for `guard` whose pattern matches `subject`.
    pub fn matching_deny_rule(&self, guard: Guard, subject: &str) -> Option<&DenyRule> {
        self.deny_patterns
            .iter()
            .find(|(rule, re)| rule.guard == guard && re.is_match(subject))
            .map(|(rule, _)| rule)
    }
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            raw: Config::default(),
            deny_patterns: Vec::new(),
        }
    }
}

/// Extract the `--config` path from command-line arguments.
///
/// Accepts `--config <path>` and `--config=<path>`; anything else is ignored.
pub fn config_path_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}
