//! # Savehooks Engine
//!
//! Turns configured hook commands into running processes:
//!
//! - **Variables**: path variables derived from the saved file and `${var}`
//!   interpolation
//! - **Runner**: sequential execution of every command matching a path, stopping
//!   at the first failure
//! - **Executor**: shell execution with captured output and a timeout
//! - **System**: default filesystem and project lookup collaborators

pub mod executor;
pub mod runner;
pub mod system;
pub mod vars;

// Re-export error types from core
pub use savehooks_core::{Error, ExecutionError, Result};

pub use executor::ShellCommandExecutor;
pub use runner::{CommandRunner, CommandRunnerBuilder, DEFAULT_TIMEOUT};
pub use system::{ProjectRoots, RealFileSystem};
pub use vars::{PathVars, interpolate};
