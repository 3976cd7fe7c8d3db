//! Process adapter shared by the guard binaries.

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use crate::audit::AuditLogger;
use crate::config::{CompiledConfig, Config, config_path_from_args};
use crate::decision::Decision;
use crate::guards::Guard;
use crate::input::HookInput;
use crate::output::format_response;

/// Exit status telling the host to skip the tool call.
pub const BLOCK_EXIT_CODE: u8 = 2;

/// A decision together with the input it was made on.
#[derive(Debug)]
pub struct Verdict {
    /// The parsed invocation, absent when stdin was not a JSON object.
    pub input: Option<HookInput>,
    /// What the host should do.
    pub decision: Decision,
}

/// Decide on raw stdin text. Unparseable input is allowed.
pub fn evaluate(guard: Guard, raw: &str, config: &CompiledConfig) -> Verdict {
    match HookInput::parse(raw) {
        Ok(input) => {
            let decision = guard.decide(&input, config);
            Verdict {
                input: Some(input),
                decision,
            }
        }
        Err(_) => Verdict {
            input: None,
            decision: Decision::allow(),
        },
    }
}

/// Run a guard as a hook process: stdin in, exit status and stderr out.
pub fn run(guard: Guard) -> ExitCode {
    let config_path = config_path_from_args(std::env::args().skip(1));

    let mut input_str = String::new();
    if io::stdin().read_to_string(&mut input_str).is_err() {
        return ExitCode::SUCCESS; // Fail-open on read error
    }

    let compiled = match Config::load(config_path.as_deref()).and_then(Config::compile) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    let verdict = evaluate(guard, &input_str, &compiled);

    if compiled.raw.audit.enabled
        && let Some(path) = &compiled.raw.audit.path
        && let Some(input) = &verdict.input
        && let Ok(mut logger) = AuditLogger::open(Path::new(path))
    {
        let _ = logger.log_decision(guard, input, &verdict.decision);
    }

    exit_code(&verdict.decision)
}

fn exit_code(decision: &Decision) -> ExitCode {
    match decision {
        Decision::Allow => ExitCode::SUCCESS,
        Decision::Block(_) => {
            if let Some(msg) = format_response(decision) {
                eprintln!("{}", msg);
            }
            ExitCode::from(BLOCK_EXIT_CODE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_malformed_input() {
        let config = CompiledConfig::default();
        let verdict = evaluate(Guard::Archive, "{not json", &config);
        assert!(verdict.input.is_none());
        assert_eq!(verdict.decision, Decision::Allow);
        assert_eq!(evaluate(Guard::DevServer, "", &config).decision, Decision::Allow);
    }

    #[test]
    fn test_evaluate_blocks() {
        let config = CompiledConfig::default();
        let verdict = evaluate(
            Guard::Archive,
            r#"{"tool_input":{"file_path":"project/archived/old.md"}}"#,
            &config,
        );
        assert!(verdict.decision.is_blocked());
        assert!(verdict.input.is_some());

        let verdict = evaluate(
            Guard::DevServer,
            r#"{"tool_input":{"command":"cd app && npm run dev"}}"#,
            &config,
        );
        assert!(verdict.decision.is_blocked());
    }

    #[test]
    fn test_evaluate_ignores_extra_field_types() {
        let config = CompiledConfig::default();
        let verdict = evaluate(
            Guard::Archive,
            r#"{"tool_name":7,"tool_input":{"file_path":"archived/a.md"}}"#,
            &config,
        );
        assert!(verdict.decision.is_blocked());

        let verdict = evaluate(
            Guard::DevServer,
            r#"{"session_id":123,"tool_input":{"command":"npm run dev"}}"#,
            &config,
        );
        assert!(verdict.decision.is_blocked());
    }

    #[test]
    fn test_evaluate_allows() {
        let config = CompiledConfig::default();
        let raw = r#"{"tool_input":{"command":"npm run build"}}"#;
        assert_eq!(evaluate(Guard::DevServer, raw, &config).decision, Decision::Allow);
        let raw = r#"{"tool_input":{"file_path":"src/main.go"}}"#;
        assert_eq!(evaluate(Guard::Archive, raw, &config).decision, Decision::Allow);
    }
}
