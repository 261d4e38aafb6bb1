//! Hook names
//!
//! A hook is a trigger point under which pattern → command rules are grouped.
//! The set is closed: configuration entries for any other name are dropped
//! while the configuration is normalized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported hook trigger points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookName {
    /// A file was saved in the editor
    #[serde(rename = "onSave")]
    OnSave,
    /// The user picked a command by hand
    #[serde(rename = "manual")]
    Manual,
}

impl HookName {
    /// All supported hooks
    pub const ALL: [HookName; 2] = [HookName::OnSave, HookName::Manual];

    /// Configuration name of the hook
    pub fn name(&self) -> &'static str {
        match self {
            HookName::OnSave => "onSave",
            HookName::Manual => "manual",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookName {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.name() == s)
            .ok_or_else(|| crate::Error::Message(format!("Unsupported hook: {s}")))
    }
}
