//! Response formatting for hook output.

use crate::decision::{BlockInfo, Decision};

/// Format a decision as output for stderr.
///
/// Allow produces nothing; a block produces its message and hint, one per line.
pub fn format_response(decision: &Decision) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => Some(format_block_message(info)),
    }
}

fn format_block_message(info: &BlockInfo) -> String {
    match &info.hint {
        Some(hint) => format!("{}\n{}", info.message, hint),
        None => info.message.clone(),
    }
}
