//! Host collaborator traits
//!
//! The runner never talks to the editor, the filesystem or the shell directly.
//! It goes through these interfaces instead, so a host can plug in its own
//! project model and tests can record what would have been executed.
//!
//! All traits are `Send + Sync`: independent runs may happen on different
//! threads at the same time.

use crate::ExecutionError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Maps a path to the project that contains it
///
/// # Examples
///
/// ```
/// use savehooks_core::ProjectLocator;
/// use std::path::{Path, PathBuf};
///
/// let locator = |path: &Path| {
///     path.strip_prefix("/work/app")
///         .ok()
///         .map(|rel| (PathBuf::from("/work/app"), rel.to_path_buf()))
/// };
///
/// let (root, rel) = locator.relativize(Path::new("/work/app/src/main.rs")).unwrap();
/// assert_eq!(root, Path::new("/work/app"));
/// assert_eq!(rel, Path::new("src/main.rs"));
/// assert!(locator.relativize(Path::new("/tmp/x")).is_none());
/// ```
pub trait ProjectLocator: Send + Sync {
    /// Return `(project_root, relative_path)` when a known project contains `path`
    fn relativize(&self, path: &Path) -> Option<(PathBuf, PathBuf)>;
}

impl<F> ProjectLocator for F
where
    F: Fn(&Path) -> Option<(PathBuf, PathBuf)> + Send + Sync,
{
    fn relativize(&self, path: &Path) -> Option<(PathBuf, PathBuf)> {
        self(path)
    }
}

/// Filesystem queries needed while deriving path variables
pub trait FileSystem: Send + Sync {
    /// Whether `path` refers to an existing directory
    fn is_dir(&self, path: &Path) -> bool;
}

/// Options for a single shell execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOptions {
    /// Working directory of the command
    pub cwd: PathBuf,
    /// Time allowed before the command is killed and reported as failed
    pub timeout: Duration,
}

/// Runs a command line through a shell
pub trait ShellExecutor: Send + Sync {
    /// Execute `command`, honoring the working directory and timeout
    ///
    /// Returns a fully populated [`ExecutionError`] when the command cannot be
    /// started, exits unsuccessfully or runs out of time.
    fn execute(&self, command: &str, options: &ExecOptions) -> Result<(), ExecutionError>;
}
