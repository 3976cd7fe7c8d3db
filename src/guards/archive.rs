//! Archived path detection.

use super::{Guard, check_deny_rules};
use crate::config::CompiledConfig;
use crate::decision::{BlockInfo, Decision};

/// Use forward slashes regardless of the host platform.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Check a file path against the archive rules.
pub fn check_archive(file_path: &str, config: &CompiledConfig) -> Decision {
    let path = normalize_path(file_path);
    let archive = &config.raw.archive;

    let rule = if archive.dir_markers.iter().any(|m| path.contains(m.as_str())) {
        Some("archive.dir")
    } else if archive.suffixes.iter().any(|s| path.ends_with(s.as_str())) {
        Some("archive.suffix")
    } else {
        None
    };

    if let Some(rule) = rule {
        return Decision::Block(
            BlockInfo::new(
                rule,
                format!("Access denied: '{}' is archived and cannot be accessed.", path),
            )
            .with_hint("Archived files are read-only historical documentation."),
        );
    }

    check_deny_rules(Guard::Archive, &path, config)
}
