//! CLI command implementations

pub mod exec;
pub mod list;
pub mod patterns;
pub mod run;

use owo_colors::OwoColorize;
use savehooks_core::ExecutionError;

/// Print a failed command with everything it wrote
pub(crate) fn print_failure(error: &ExecutionError) {
    eprintln!("{} {}", "✗".red(), error.message);
    for (label, output) in [("stdout", &error.stdout), ("stderr", &error.stderr)] {
        let output = output.trim_end();
        if !output.is_empty() {
            eprintln!("{}", format!("── {label} ──").dimmed());
            eprintln!("{output}");
        }
    }
}
