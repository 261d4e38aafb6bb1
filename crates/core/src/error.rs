//! Base error types for savehooks
//!
//! This module provides the foundation error types that all crates can use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration cannot be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Glob pattern rejected by the pattern compiler
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern {
        /// Pattern as written in the configuration
        pattern: String,
        /// Reason reported by the compiler
        message: String,
    },

    /// A command failed while running a hook
    #[error("Command execution failed: {0}")]
    Execution(#[from] ExecutionError),

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Whether this error comes from configuration loading or normalization
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::InvalidPattern { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A single failed subprocess
///
/// Carries the failure name and message together with everything the process
/// wrote to stdout and stderr, whichever stream caused the failure. The host
/// serializes this value into its error notification.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{name}: {message}")]
pub struct ExecutionError {
    /// Failure kind, e.g. `ExitStatus` or `Timeout`
    pub name: String,
    /// Human readable description
    pub message: String,
    /// Captured standard output
    #[serde(default)]
    pub stdout: String,
    /// Captured standard error
    #[serde(default)]
    pub stderr: String,
}

impl ExecutionError {
    /// Create an error without captured output
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Attach captured output
    #[must_use]
    pub fn with_output(mut self, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self.stderr = stderr.into();
        self
    }
}
