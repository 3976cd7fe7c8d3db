//! Hook Guards - PreToolUse policy hooks.
//!
//! Two stateless guards that read one tool invocation as JSON on stdin and
//! exit 0 to allow it or 2 to block it: `archive-guard` keeps file tools away
//! from archived paths, `dev-server-guard` stops shell commands that start a
//! dev server. Anything the guards cannot read is allowed.

pub mod audit;
pub mod config;
pub mod decision;
pub mod guards;
pub mod hook;
pub mod input;
pub mod output;

pub use config::{CompiledConfig, Config};
pub use decision::Decision;
pub use guards::Guard;
pub use input::HookInput;
pub use output::format_response;
