//! Default host collaborators
//!
//! - [`RealFileSystem`]: asks the actual filesystem
//! - [`ProjectRoots`]: a fixed list of project directories, the innermost
//!   containing root wins

use savehooks_core::{FileSystem, ProjectLocator};
use std::path::{Path, PathBuf};

/// Real filesystem implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Project lookup over a known set of root directories
#[derive(Debug, Clone, Default)]
pub struct ProjectRoots {
    roots: Vec<PathBuf>,
}

impl ProjectRoots {
    /// Create a locator over the given roots
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Known roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ProjectLocator for ProjectRoots {
    fn relativize(&self, path: &Path) -> Option<(PathBuf, PathBuf)> {
        self.roots
            .iter()
            .filter_map(|root| {
                path.strip_prefix(root)
                    .ok()
                    .map(|relative| (root.clone(), relative.to_path_buf()))
            })
            .max_by_key(|(root, _)| root.components().count())
    }
}
