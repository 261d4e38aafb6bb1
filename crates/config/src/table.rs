//! Normalized hook table
//!
//! Normalization flattens the raw configuration into
//! hook → pattern → ordered commands:
//!
//! - `hooks` entries are visited before `files` entries, each in declared order
//! - script aliases are substituted here, never at match time
//! - nested maps are flattened by joining patterns with `/`, at any depth
//! - a pattern reached twice keeps its first position and accumulates commands
//! - unsupported hook names are dropped
//!
//! Each pattern is compiled once. `*` does not cross `/`, and leading dots
//! need no special treatment, so `**` matches `/home/u/.config/x.cson`.

use crate::raw::{CommandSpec, RawConfig};
use crate::{Error, HookName, Result};
use globset::{Glob, GlobBuilder, GlobMatcher};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;

/// A compiled pattern with its commands
#[derive(Debug, Clone)]
pub struct PatternRule {
    glob: Glob,
    matcher: GlobMatcher,
    commands: Vec<String>,
}

impl PatternRule {
    fn compile(pattern: &str, commands: Vec<String>) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.kind().to_string(),
            })?;
        let matcher = glob.compile_matcher();

        Ok(Self {
            glob,
            matcher,
            commands,
        })
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        self.glob.glob()
    }

    /// Commands with aliases already resolved
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Whether `path` matches this pattern
    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}

impl PartialEq for PatternRule {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob && self.commands == other.commands
    }
}

impl Eq for PatternRule {}

/// Hook → pattern → commands lookup table
///
/// Built once per configuration load and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookTable {
    hooks: IndexMap<HookName, Vec<PatternRule>>,
}

impl HookTable {
    /// Normalize a raw configuration into a lookup table
    ///
    /// Fails when a pattern cannot be compiled. The whole call is aborted in
    /// that case; no partial table is produced.
    pub fn normalize(config: &RawConfig) -> Result<Self> {
        let mut collector = Collector::new(&config.scripts);

        for (hook, patterns) in &config.hooks {
            for (pattern, spec) in patterns {
                collector.add(hook, pattern, spec);
            }
        }

        for (pattern, hooks) in &config.files {
            for (hook, spec) in hooks {
                collector.add(hook, pattern, spec);
            }
        }

        let mut table = HookTable::default();
        for (hook, patterns) in collector.hooks {
            let rules = patterns
                .into_iter()
                .map(|(pattern, commands)| PatternRule::compile(&pattern, commands))
                .collect::<Result<Vec<_>>>()?;
            table.hooks.insert(hook, rules);
        }

        tracing::debug!(
            hooks = table.hooks.len(),
            patterns = table.hooks.values().map(Vec::len).sum::<usize>(),
            "Normalized hook configuration"
        );

        Ok(table)
    }

    /// Commands whose pattern matches `path`, in pattern declaration order
    ///
    /// The result is neither deduplicated nor sorted. An unknown hook yields
    /// an empty list.
    pub fn commands_for(&self, path: &Path, hook: HookName) -> Vec<String> {
        let Some(rules) = self.hooks.get(&hook) else {
            return Vec::new();
        };

        rules
            .iter()
            .filter(|rule| rule.is_match(path))
            .flat_map(|rule| rule.commands.iter().cloned())
            .collect()
    }

    /// Hooks present in the table, in first-seen order
    pub fn hooks(&self) -> impl Iterator<Item = HookName> + '_ {
        self.hooks.keys().copied()
    }

    /// Pattern rules of a hook
    pub fn rules(&self, hook: HookName) -> &[PatternRule] {
        self.hooks.get(&hook).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if no hook has any pattern
    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(Vec::is_empty)
    }
}

impl Serialize for HookTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Rules<'a>(&'a [PatternRule]);

        impl Serialize for Rules<'_> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for rule in self.0 {
                    map.serialize_entry(rule.pattern(), rule.commands())?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.hooks.len()))?;
        for (hook, rules) in &self.hooks {
            map.serialize_entry(hook, &Rules(rules))?;
        }
        map.end()
    }
}

/// Accumulates hook → pattern → commands before patterns are compiled
struct Collector<'a> {
    scripts: &'a IndexMap<String, String>,
    hooks: IndexMap<HookName, IndexMap<String, Vec<String>>>,
}

impl<'a> Collector<'a> {
    fn new(scripts: &'a IndexMap<String, String>) -> Self {
        Self {
            scripts,
            hooks: IndexMap::new(),
        }
    }

    fn add(&mut self, hook: &str, pattern: &str, spec: &CommandSpec) {
        match hook.parse::<HookName>() {
            Ok(hook) => self.push(hook, pattern, spec),
            Err(_) => tracing::debug!(hook, pattern, "Ignoring unsupported hook"),
        }
    }

    fn push(&mut self, hook: HookName, pattern: &str, spec: &CommandSpec) {
        match spec {
            CommandSpec::Literal(command) => {
                self.append(hook, pattern, std::slice::from_ref(command));
            }
            CommandSpec::List(commands) => self.append(hook, pattern, commands),
            CommandSpec::Nested(children) => {
                for (child, spec) in children {
                    self.push(hook, &format!("{pattern}/{child}"), spec);
                }
            }
        }
    }

    fn append(&mut self, hook: HookName, pattern: &str, commands: &[String]) {
        let scripts = self.scripts;
        let list = self
            .hooks
            .entry(hook)
            .or_default()
            .entry(pattern.to_string())
            .or_default();

        list.extend(
            commands
                .iter()
                .map(|command| scripts.get(command).unwrap_or(command).clone()),
        );
    }
}
