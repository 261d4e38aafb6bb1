//! Configuration management for savehooks
//!
//! This crate handles:
//! - Raw configuration parsing (`scripts`, `hooks`, `files` sections)
//! - Normalization into a flat hook → pattern → commands table
//! - Glob matching of file paths against the table
//! - Default configuration location
//! - Logging initialization

pub mod dirs;
pub mod logging;
pub mod raw;
pub mod resolver;
pub mod table;

// Re-export error types from core
pub use savehooks_core::{Error, HookName, Result};

// Re-export main types
pub use dirs::{config_dir, default_config_file};
pub use raw::{CommandSpec, RawConfig};
pub use resolver::{HookCommand, PatternResolver};
pub use table::HookTable;
