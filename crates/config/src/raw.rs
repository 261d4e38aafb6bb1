//! Raw hook configuration as handed over by the host
//!
//! The document has three optional sections:
//!
//! ```toml
//! [scripts]
//! lint = "eslint --fix ${path}"
//!
//! [hooks.onSave]
//! "**/*.js" = "lint"
//! "src/**" = ["make fmt", "make check"]
//!
//! [hooks.onSave."docs"]
//! "*.md" = "mdformat ${path}"
//!
//! [files."**".manual]
//! "*.rs" = "cargo check"
//! ```
//!
//! `hooks` is keyed hook → pattern, `files` is keyed pattern → hook. Both end
//! up in the same normalized table. Map order is significant and preserved.

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Command value attached to a pattern
///
/// The variant is decided once, when the configuration is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// A single command or script alias
    Literal(String),
    /// Several commands, run in order
    List(Vec<String>),
    /// Sub-patterns matched below the outer pattern
    Nested(IndexMap<String, CommandSpec>),
}

impl From<&str> for CommandSpec {
    fn from(command: &str) -> Self {
        CommandSpec::Literal(command.to_string())
    }
}

impl From<Vec<String>> for CommandSpec {
    fn from(commands: Vec<String>) -> Self {
        CommandSpec::List(commands)
    }
}

impl TryFrom<JsonValue> for CommandSpec {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(command) => Ok(CommandSpec::Literal(command)),
            JsonValue::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    JsonValue::String(command) => Ok(command),
                    other => Err(uninterpretable(&other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(CommandSpec::List),
            JsonValue::Object(map) => map
                .into_iter()
                .map(|(pattern, value)| Ok((pattern, CommandSpec::try_from(value)?)))
                .collect::<Result<IndexMap<_, _>>>()
                .map(CommandSpec::Nested),
            other => Err(uninterpretable(&other)),
        }
    }
}

impl<'de> Deserialize<'de> for CommandSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        CommandSpec::try_from(value).map_err(|e| match e {
            Error::Config(message) => serde::de::Error::custom(message),
            other => serde::de::Error::custom(other),
        })
    }
}

fn uninterpretable(value: &JsonValue) -> Error {
    Error::Config(format!("Cannot interpret command value: {value}"))
}

/// Declarative hook configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Alias name → command line
    #[serde(default)]
    pub scripts: IndexMap<String, String>,

    /// Hook name → pattern → command value
    #[serde(default)]
    pub hooks: IndexMap<String, IndexMap<String, CommandSpec>>,

    /// Pattern → hook name → command value
    #[serde(default)]
    pub files: IndexMap<String, IndexMap<String, CommandSpec>>,
}

impl RawConfig {
    /// Load configuration from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Err(Error::Config(format!(
                "Unsupported config format '{}': expected .toml or .json",
                path.display()
            ))),
        }
        .map_err(|e| match e {
            Error::Config(message) => {
                Error::Config(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {e}")))
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse JSON: {e}")))
    }

    /// Build from an in-memory JSON value handed over by a host
    pub fn from_value(value: JsonValue) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check if no section defines anything
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.files.is_empty()
    }
}
