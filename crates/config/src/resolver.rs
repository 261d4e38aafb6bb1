//! Pattern resolver
//!
//! Owns the active [`HookTable`] and answers "which commands apply to this
//! path for this hook". Reconfiguration builds a complete new table and swaps
//! it in; readers keep using the snapshot they already hold, so a query never
//! observes a half-built table.

use crate::raw::RawConfig;
use crate::table::HookTable;
use crate::{HookName, Result};
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// A command offered for a path, tagged with the hook it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookCommand {
    /// Hook the command is configured under
    #[serde(rename = "name")]
    pub hook: HookName,
    /// Command template with aliases resolved
    pub command: String,
}

/// Thread-safe holder of the active hook table
#[derive(Debug, Default)]
pub struct PatternResolver {
    table: RwLock<Arc<HookTable>>,
}

impl PatternResolver {
    /// Create a resolver with an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from a raw configuration
    pub fn from_config(config: &RawConfig) -> Result<Self> {
        let table = HookTable::normalize(config)?;
        Ok(Self {
            table: RwLock::new(Arc::new(table)),
        })
    }

    /// Replace the active configuration
    ///
    /// On error the previous table stays active.
    #[tracing::instrument(skip_all)]
    pub fn set_config(&self, config: &RawConfig) -> Result<()> {
        let table = Arc::new(HookTable::normalize(config)?);
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = table;
        tracing::debug!("Hook configuration replaced");
        Ok(())
    }

    /// Current table
    pub fn snapshot(&self) -> Arc<HookTable> {
        Arc::clone(&self.table.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Commands configured for `path` under `hook`
    pub fn get_commands(&self, path: &Path, hook: HookName) -> Vec<String> {
        self.snapshot().commands_for(path, hook)
    }

    /// Same as [`get_commands`](Self::get_commands) for a hook given by name
    ///
    /// An unsupported name yields an empty list.
    pub fn get_commands_by_name(&self, path: &Path, hook: &str) -> Vec<String> {
        match hook.parse::<HookName>() {
            Ok(hook) => self.get_commands(path, hook),
            Err(_) => Vec::new(),
        }
    }

    /// Every command offered for `path`, hook by hook in table order
    pub fn list_hooks(&self, path: &Path) -> Vec<HookCommand> {
        let table = self.snapshot();

        table
            .hooks()
            .flat_map(|hook| {
                table
                    .commands_for(path, hook)
                    .into_iter()
                    .map(move |command| HookCommand { hook, command })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use serde_json::json;

    fn resolver(value: serde_json::Value) -> PatternResolver {
        PatternResolver::from_config(&RawConfig::from_value(value).unwrap()).unwrap()
    }

    #[test]
    fn test_new_resolver_is_empty() {
        let resolver = PatternResolver::new();

        assert!(resolver.snapshot().is_empty());
        assert!(
            resolver
                .get_commands(Path::new("/dev/null"), HookName::OnSave)
                .is_empty()
        );
        assert!(resolver.list_hooks(Path::new("/dev/null")).is_empty());
    }

    #[test]
    fn test_get_commands() {
        let resolver = resolver(json!({"hooks": {"onSave": {"**": "test command"}}}));

        assert_eq!(
            resolver.get_commands(Path::new("foo/bar.js"), HookName::OnSave),
            ["test command"]
        );
        assert!(
            resolver
                .get_commands(Path::new("foo/bar.js"), HookName::Manual)
                .is_empty()
        );
    }

    #[test]
    fn test_get_commands_by_name() {
        let resolver = resolver(json!({"hooks": {"onSave": {"**": "test command"}}}));

        assert_eq!(
            resolver.get_commands_by_name(Path::new("a.js"), "onSave"),
            ["test command"]
        );
        assert!(
            resolver
                .get_commands_by_name(Path::new("a.js"), "onOpen")
                .is_empty()
        );
    }

    #[test]
    fn test_list_hooks() {
        let resolver = resolver(json!({
            "scripts": {"someScript": "test command"},
            "hooks": {
                "onSave": {"**": {"*.js": "someScript", "*.scss": "someScript"}},
                "manual": {"**": ["someScript", "other command"], "**/*.js": "command3"}
            }
        }));

        let listed = resolver.list_hooks(Path::new("foo/bar.js"));

        assert_eq!(
            serde_json::to_value(&listed).unwrap(),
            json!([
                {"name": "onSave", "command": "test command"},
                {"name": "manual", "command": "test command"},
                {"name": "manual", "command": "other command"},
                {"name": "manual", "command": "command3"}
            ])
        );
    }

    #[test]
    fn test_set_config_replaces_table() {
        let resolver = resolver(json!({"hooks": {"onSave": {"**": "old"}}}));
        let before = resolver.snapshot();

        resolver
            .set_config(&RawConfig::from_value(json!({"hooks": {"manual": {"**": "new"}}})).unwrap())
            .unwrap();

        // Snapshots taken earlier are unaffected
        assert_eq!(before.commands_for(Path::new("x"), HookName::OnSave), ["old"]);

        assert!(
            resolver
                .get_commands(Path::new("x"), HookName::OnSave)
                .is_empty()
        );
        assert_eq!(resolver.get_commands(Path::new("x"), HookName::Manual), ["new"]);
    }

    #[test]
    fn test_failed_set_config_keeps_previous_table() {
        let resolver = resolver(json!({"hooks": {"onSave": {"**": "old"}}}));

        let broken = RawConfig::from_value(json!({"hooks": {"onSave": {"{a": "x"}}})).unwrap();
        assert!(resolver.set_config(&broken).unwrap_err().is_config());

        assert_eq!(resolver.get_commands(Path::new("x"), HookName::OnSave), ["old"]);
    }

    #[test]
    fn test_concurrent_readers_during_swap() {
        let resolver = Arc::new(resolver(json!({"hooks": {"onSave": {"**": "a"}}})));
        let alternate = RawConfig::from_value(json!({"hooks": {"onSave": {"**": ["b", "b"]}}})).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let resolver = Arc::clone(&resolver);
                scope.spawn(move || {
                    for _ in 0..200 {
                        let commands = resolver.get_commands(Path::new("f.rs"), HookName::OnSave);
                        assert!(commands == ["a"] || commands == ["b", "b"]);
                    }
                });
            }

            for _ in 0..50 {
                resolver.set_config(&alternate).unwrap();
            }
        });
    }
}
