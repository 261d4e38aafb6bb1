//! Shell command execution
//!
//! Runs command lines through the platform shell with duct, capturing both
//! output streams and enforcing the timeout.

use savehooks_core::{ExecOptions, ExecutionError, ShellExecutor};
use std::process::Output;

/// Failure names reported in [`ExecutionError::name`]
pub mod failure {
    /// The shell could not be started
    pub const SPAWN: &str = "SpawnError";
    /// The command exited unsuccessfully or was killed by a signal
    pub const EXIT_STATUS: &str = "ExitStatus";
    /// The command ran longer than allowed and was killed
    ///
    /// Carries no captured output: the pipes are not drained after the kill,
    /// since processes spawned by the command may keep them open.
    pub const TIMEOUT: &str = "Timeout";
    /// Waiting for the command failed
    pub const WAIT: &str = "WaitError";
}

/// Executes commands via `sh -c` (`cmd /C` on Windows)
#[derive(Debug, Clone)]
pub struct ShellCommandExecutor {
    shell: String,
    flag: String,
}

impl Default for ShellCommandExecutor {
    fn default() -> Self {
        if cfg!(windows) {
            Self::new("cmd", "/C")
        } else {
            Self::new("sh", "-c")
        }
    }
}

impl ShellCommandExecutor {
    /// Use a custom shell, e.g. `("bash", "-c")`
    pub fn new(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }
}

impl ShellExecutor for ShellCommandExecutor {
    #[tracing::instrument(skip(self, options), fields(cwd = %options.cwd.display(), timeout_ms = options.timeout.as_millis()))]
    fn execute(&self, command: &str, options: &ExecOptions) -> Result<(), ExecutionError> {
        let mut expression = duct::cmd(self.shell.as_str(), [self.flag.as_str(), command])
            .stdin_null()
            .stdout_capture()
            .stderr_capture()
            .unchecked();

        // An empty cwd means the current directory
        if !options.cwd.as_os_str().is_empty() {
            expression = expression.dir(&options.cwd);
        }

        let handle = expression.start().map_err(|e| {
            ExecutionError::new(
                failure::SPAWN,
                format!("Failed to start command '{command}': {e}"),
            )
        })?;

        match handle.wait_timeout(options.timeout) {
            Ok(Some(output)) => check_status(command, output),
            Ok(None) => {
                if let Err(e) = handle.kill() {
                    tracing::warn!(error = %e, "Failed to kill timed out command");
                }
                Err(ExecutionError::new(
                    failure::TIMEOUT,
                    format!(
                        "Command '{}' timed out after {} ms",
                        command,
                        options.timeout.as_millis()
                    ),
                ))
            }
            Err(e) => Err(ExecutionError::new(
                failure::WAIT,
                format!("Command '{command}' failed: {e}"),
            )),
        }
    }
}

fn check_status(command: &str, output: &Output) -> Result<(), ExecutionError> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.success() {
        tracing::trace!(%stdout, %stderr, "Command output");
        return Ok(());
    }

    Err(ExecutionError::new(
        failure::EXIT_STATUS,
        format!("Command '{}' failed with {}", command, output.status),
    )
    .with_output(stdout, stderr))
}
