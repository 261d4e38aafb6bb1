//! Integration tests for loading and resolving hook configuration

use savehooks_config::{HookName, PatternResolver, RawConfig};
use std::path::Path;

const CONFIG: &str = r#"
[scripts]
fmt = "rustfmt ${path}"
lint = "eslint --fix ${path}"

[hooks.onSave]
"**/*.rs" = "fmt"
"web/**/*.{js,jsx}" = ["lint", "prettier --write ${path}"]

[hooks.onSave."docs"]
"*.md" = "mdformat ${path}"

[hooks.onSave."**/.config"]
"*.toml" = "taplo fmt ${path}"

[hooks.onOpen]
"**" = "never used"

[files."crates/**".manual]
"*.rs" = ["cargo check", "fmt"]

[files."**/*.rs"]
onSave = "cargo clippy"
"#;

fn load(temp: &tempfile::TempDir) -> PatternResolver {
    let path = temp.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();

    let config = RawConfig::load(&path).unwrap();
    PatternResolver::from_config(&config).unwrap()
}

#[test]
fn test_resolution_from_toml_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let resolver = load(&temp);

    // Test cases: (path, hook, expected commands, description)
    let test_cases: Vec<(&str, HookName, Vec<&str>, &str)> = vec![
        (
            "crates/core/src/lib.rs",
            HookName::OnSave,
            vec!["rustfmt ${path}", "cargo clippy"],
            "hooks section first, files section appended to the same pattern",
        ),
        (
            "web/src/app.jsx",
            HookName::OnSave,
            vec!["eslint --fix ${path}", "prettier --write ${path}"],
            "brace alternation with list value",
        ),
        (
            "docs/guide.md",
            HookName::OnSave,
            vec!["mdformat ${path}"],
            "nested pattern joined with its parent",
        ),
        (
            "docs/api/guide.md",
            HookName::OnSave,
            vec![],
            "nested * does not cross directories",
        ),
        (
            "/home/user/.config/starship.toml",
            HookName::OnSave,
            vec!["taplo fmt ${path}"],
            "dot directories are matched",
        ),
        (
            "crates/cli/src/main.rs",
            HookName::Manual,
            vec!["cargo check", "rustfmt ${path}"],
            "files section nested under manual",
        ),
        (
            "crates/main.rs",
            HookName::Manual,
            vec!["cargo check", "rustfmt ${path}"],
            "** in the parent also matches zero directories",
        ),
        (
            "src/main.rs",
            HookName::Manual,
            vec![],
            "nested pattern stays under its parent",
        ),
        ("README.txt", HookName::OnSave, vec![], "no matching pattern"),
    ];

    for (path, hook, expected, description) in test_cases {
        assert_eq!(
            resolver.get_commands(Path::new(path), hook),
            expected,
            "{description}: {path} ({hook})"
        );
    }
}

#[test]
fn test_unsupported_hook_is_dropped_from_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let resolver = load(&temp);

    let hooks: Vec<_> = resolver.snapshot().hooks().collect();
    assert_eq!(hooks, [HookName::OnSave, HookName::Manual]);
    assert!(
        resolver
            .get_commands_by_name(Path::new("anything"), "onOpen")
            .is_empty()
    );
}

#[test]
fn test_list_hooks_from_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let resolver = load(&temp);

    let listed: Vec<_> = resolver
        .list_hooks(Path::new("crates/main.rs"))
        .into_iter()
        .map(|entry| (entry.hook, entry.command))
        .collect();

    assert_eq!(
        listed,
        [
            (HookName::OnSave, "rustfmt ${path}".to_string()),
            (HookName::OnSave, "cargo clippy".to_string()),
            (HookName::Manual, "cargo check".to_string()),
            (HookName::Manual, "rustfmt ${path}".to_string()),
        ]
    );
}

#[test]
fn test_invalid_command_value_in_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[hooks.onSave]\n\"**\" = 10\n").unwrap();

    let err = RawConfig::load(&path).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("Cannot interpret command value"));
}
