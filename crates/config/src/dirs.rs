//! XDG directory utilities
//!
//! Follows the XDG Base Directory specification using the `xdg` crate:
//! `XDG_CONFIG_HOME` defaults to ~/.config

use std::path::PathBuf;
use xdg::BaseDirectories;

/// Get the savehooks config directory
///
/// Returns `$XDG_CONFIG_HOME/savehooks` or `~/.config/savehooks`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    BaseDirectories::with_prefix("savehooks").get_config_home()
}

/// Get the default config file path
///
/// Prefers an existing `config.json` only when there is no `config.toml`;
/// otherwise returns `config.toml`, existing or not.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    let dir = config_dir()?;
    let toml = dir.join("config.toml");
    let json = dir.join("config.json");

    if !toml.exists() && json.exists() {
        Some(json)
    } else {
        Some(toml)
    }
}
