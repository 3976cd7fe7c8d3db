//! Dev-server guard hook entry point.

use hook_guards::Guard;
use hook_guards::hook;

use std::process::ExitCode;

fn main() -> ExitCode {
    hook::run(Guard::DevServer)
}
