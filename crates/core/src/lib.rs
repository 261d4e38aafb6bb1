//! Core types and utilities for savehooks
//!
//! This is the foundation crate that all other savehooks crates depend on.
//! It provides:
//! - Hook names
//! - Base error types, including the structured execution failure
//! - Host collaborator traits (project lookup, filesystem, shell execution)
//!
//! This crate has no dependencies on other savehooks crates.

pub mod error;
pub mod hook;
pub mod traits;

pub use error::{Error, ExecutionError, Result};
pub use hook::HookName;
pub use traits::{ExecOptions, FileSystem, ProjectLocator, ShellExecutor};
