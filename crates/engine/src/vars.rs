//! Path variables and template interpolation
//!
//! Every run derives a fresh [`PathVars`] record from the saved path. Command
//! templates reference its fields as `${name}`:
//!
//! | variable   | `/work/app/src/file.js` in project `/work/app` |
//! |------------|------------------------------------------------|
//! | `project`  | `/work/app`                                    |
//! | `path`     | `/work/app/src/file.js`                        |
//! | `relative` | `src/file.js`                                  |
//! | `root`     | `/`                                            |
//! | `dir`      | `/work/app/src`                                |
//! | `base`     | `file.js`                                      |
//! | `ext`      | `.js`                                          |
//! | `name`     | `file`                                         |

use regex::{Captures, Regex};
use savehooks_core::{FileSystem, ProjectLocator};
use serde::Serialize;
use std::path::{Path, is_separator};
use std::sync::LazyLock;

/// `${key}` placeholder, key being anything up to the closing brace
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("Failed to compile placeholder pattern")
});

/// Variables describing the file a hook runs for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathVars {
    /// Project root containing the file, or the file's directory
    pub project: String,
    /// Path with trailing separators removed
    pub path: String,
    /// Path relative to the project, or the base name without a project
    pub relative: String,
    /// Directory part
    pub dir: String,
    /// File name with extension
    pub base: String,
    /// Extension including the leading dot
    pub ext: String,
    /// File name without extension
    pub name: String,
    /// `/` for absolute paths, empty otherwise
    pub root: String,
}

impl PathVars {
    /// Derive variables for `path`
    ///
    /// The project comes from `locator`; `fs` decides whether the path is a
    /// directory, in which case the whole base name is kept as `name`.
    pub fn derive(path: &Path, locator: &dyn ProjectLocator, fs: &dyn FileSystem) -> Self {
        let raw = path.to_string_lossy();
        let path = strip_trailing_separators(&raw);
        let parts = PathParts::parse(path);

        let (name, ext) = if fs.is_dir(Path::new(path)) {
            (parts.base.to_string(), String::new())
        } else {
            (parts.name.to_string(), parts.ext.to_string())
        };

        let (project, relative) = match locator.relativize(Path::new(path)) {
            Some((root, relative)) => (
                root.to_string_lossy().into_owned(),
                relative.to_string_lossy().into_owned(),
            ),
            None => (parts.dir.to_string(), parts.base.to_string()),
        };

        Self {
            project,
            path: path.to_string(),
            relative,
            dir: parts.dir.to_string(),
            base: parts.base.to_string(),
            ext,
            name,
            root: parts.root.to_string(),
        }
    }

    /// Look up a variable by name
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "project" => &self.project,
            "path" => &self.path,
            "relative" => &self.relative,
            "dir" => &self.dir,
            "base" => &self.base,
            "ext" => &self.ext,
            "name" => &self.name,
            "root" => &self.root,
            _ => return None,
        };
        Some(value)
    }

    /// Replace `${var}` placeholders in `template` with these variables
    pub fn interpolate(&self, template: &str) -> String {
        interpolate(template, |key| self.get(key))
    }
}

/// Replace every `${key}` in `template` for which `lookup` knows a value
///
/// Unknown keys are left verbatim. Substituted values are not scanned again.
///
/// # Examples
///
/// ```
/// use savehooks_engine::vars::interpolate;
///
/// let lookup = |key: &str| (key == "var").then_some("bar");
/// assert_eq!(interpolate("foo ${var}", lookup), "foo bar");
/// assert_eq!(interpolate("foo ${missing}", lookup), "foo ${missing}");
/// ```
pub fn interpolate<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match lookup(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Remove trailing separators, keeping a lone root intact
fn strip_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

/// Conventional split of a path string into root, dir, base, name and ext
#[derive(Debug, PartialEq, Eq)]
struct PathParts<'a> {
    root: &'a str,
    dir: &'a str,
    base: &'a str,
    name: &'a str,
    ext: &'a str,
}

impl<'a> PathParts<'a> {
    fn parse(path: &'a str) -> Self {
        let root = if path.starts_with(is_separator) {
            &path[..1]
        } else {
            ""
        };

        let (dir, base) = match path.rfind(is_separator) {
            // Separator at the start: the directory is the root itself
            Some(0) => (&path[..1], &path[1..]),
            Some(i) => (&path[..i], &path[i + 1..]),
            None => ("", path),
        };

        // A leading dot does not start an extension (".bashrc"), nor do
        // names made only of dots ("..")
        let (name, ext) = match base.rfind('.') {
            Some(i) if i > 0 && !base.chars().all(|c| c == '.') => (&base[..i], &base[i..]),
            _ => (base, ""),
        };

        Self {
            root,
            dir,
            base,
            name,
            ext,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::path::PathBuf;

    struct NoProject;

    impl ProjectLocator for NoProject {
        fn relativize(&self, _path: &Path) -> Option<(PathBuf, PathBuf)> {
            None
        }
    }

    struct Dirs(Vec<&'static str>);

    impl FileSystem for Dirs {
        fn is_dir(&self, path: &Path) -> bool {
            self.0.iter().any(|dir| Path::new(dir) == path)
        }
    }

    fn project(path: &Path) -> Option<(PathBuf, PathBuf)> {
        path.strip_prefix("/path/to/the/project")
            .ok()
            .map(|rel| (PathBuf::from("/path/to/the/project"), rel.to_path_buf()))
    }

    #[test]
    fn test_interpolate_known_var() {
        let lookup = |key: &str| (key == "var").then_some("bar");
        assert_eq!(interpolate("foo ${var}", lookup), "foo bar");
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholder() {
        assert_eq!(interpolate("foo ${missing}", |_| None), "foo ${missing}");
    }

    #[test]
    fn test_interpolate_every_occurrence() {
        let lookup = |key: &str| match key {
            "a" => Some("1"),
            "b" => Some("2"),
            _ => None,
        };
        assert_eq!(interpolate("${a}-${b}-${a}-${c}", lookup), "1-2-1-${c}");
    }

    #[test]
    fn test_interpolate_is_not_recursive() {
        let lookup = |key: &str| match key {
            "outer" => Some("${inner}"),
            "inner" => Some("boom"),
            _ => None,
        };
        assert_eq!(interpolate("echo ${outer}", lookup), "echo ${inner}");
    }

    #[test]
    fn test_interpolate_ignores_empty_braces() {
        assert_eq!(interpolate("echo ${} $path", |_| Some("x")), "echo ${} $path");
    }

    #[test]
    fn test_interpolate_substitutes_empty_values() {
        let vars = PathVars::derive(Path::new("/a/b/archive.tar"), &NoProject, &Dirs(vec!["/a/b/archive.tar"]));
        assert_eq!(vars.interpolate("[${ext}]"), "[]");
    }

    #[test]
    fn test_dotfile_has_empty_extension() {
        let vars = PathVars::derive(Path::new("/home/u/.bashrc"), &NoProject, &Dirs(vec![]));

        assert_eq!(vars.name, ".bashrc");
        assert_eq!(vars.ext, "");
        // Known but empty variables are substituted, not left as placeholders
        assert_eq!(vars.interpolate("cp ${name}${ext} ${name}.bak"), "cp .bashrc .bashrc.bak");
        assert_eq!(vars.interpolate("[${ext}] ${unknown}"), "[] ${unknown}");
    }

    #[test]
    fn test_derive_with_project() {
        let vars = PathVars::derive(
            Path::new("/path/to/the/project/src/file.js"),
            &project,
            &Dirs(vec![]),
        );

        assert_eq!(
            vars,
            PathVars {
                project: "/path/to/the/project".into(),
                path: "/path/to/the/project/src/file.js".into(),
                relative: "src/file.js".into(),
                dir: "/path/to/the/project/src".into(),
                base: "file.js".into(),
                ext: ".js".into(),
                name: "file".into(),
                root: "/".into(),
            }
        );
    }

    #[test]
    fn test_derive_without_project() {
        let vars = PathVars::derive(Path::new("/some/path/to/file.js"), &NoProject, &Dirs(vec![]));

        assert_eq!(
            vars,
            PathVars {
                project: "/some/path/to".into(),
                path: "/some/path/to/file.js".into(),
                relative: "file.js".into(),
                dir: "/some/path/to".into(),
                base: "file.js".into(),
                ext: ".js".into(),
                name: "file".into(),
                root: "/".into(),
            }
        );
    }

    #[test]
    fn test_derive_directory_keeps_full_name() {
        let vars = PathVars::derive(
            Path::new("/a/b/archive.tar"),
            &NoProject,
            &Dirs(vec!["/a/b/archive.tar"]),
        );

        assert_eq!(vars.base, "archive.tar");
        assert_eq!(vars.name, "archive.tar");
        assert_eq!(vars.ext, "");
    }

    #[test]
    fn test_derive_file_splits_extension() {
        let vars = PathVars::derive(Path::new("/a/b/archive.tar"), &NoProject, &Dirs(vec![]));

        assert_eq!(vars.name, "archive");
        assert_eq!(vars.ext, ".tar");
    }

    #[test]
    fn test_derive_strips_trailing_separators() {
        let vars = PathVars::derive(Path::new("/a/b/dir//"), &NoProject, &Dirs(vec!["/a/b/dir"]));

        assert_eq!(vars.path, "/a/b/dir");
        assert_eq!(vars.dir, "/a/b");
        assert_eq!(vars.base, "dir");
        assert_eq!(vars.name, "dir");
    }

    #[test]
    fn test_derive_relative_path() {
        let vars = PathVars::derive(Path::new("bar/baz"), &NoProject, &Dirs(vec![]));

        assert_eq!(vars.project, "bar");
        assert_eq!(vars.root, "");
        assert_eq!(vars.dir, "bar");
        assert_eq!(vars.base, "baz");
        assert_eq!(vars.relative, "baz");
        assert_eq!(vars.ext, "");
    }

    #[test]
    fn test_path_parts() {
        // Test cases: (input, root, dir, base, name, ext)
        let cases = [
            ("/", "/", "/", "", "", ""),
            ("/file.txt", "/", "/", "file.txt", "file", ".txt"),
            ("/home/u/.bashrc", "/", "/home/u", ".bashrc", ".bashrc", ""),
            ("a/b.tar.gz", "", "a", "b.tar.gz", "b.tar", ".gz"),
            ("file.", "", "", "file.", "file", "."),
            ("x/..", "", "x", "..", "..", ""),
            ("plain", "", "", "plain", "plain", ""),
        ];

        for (input, root, dir, base, name, ext) in cases {
            assert_eq!(
                PathParts::parse(input),
                PathParts {
                    root,
                    dir,
                    base,
                    name,
                    ext
                },
                "parsing {input}"
            );
        }
    }

    #[test]
    fn test_get_unknown_var() {
        let vars = PathVars::default();
        assert_eq!(vars.get("path"), Some(""));
        assert_eq!(vars.get("home"), None);
    }
}
