//! Project layout rooted at the resolved repository root.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".changelog.toml";

/// Capability to find the directory entries are filed under.
pub trait RootResolver {
    fn resolve_root(&self) -> Result<PathBuf>;
}

/// All canonical paths for a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    pub unreleased_changes_path: PathBuf,
    pub config_path: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            unreleased_changes_path: root.join("releases").join("unreleased"),
            config_path: root.join(CONFIG_FILE_NAME),
            root,
        }
    }

    /// Resolve the root with `resolver` and lay out the project under it.
    pub fn discover(resolver: &dyn RootResolver) -> Result<Self> {
        let root = resolver.resolve_root()?;
        debug!(root = %root.display(), "project root resolved");
        Ok(Self::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntryError;
    use crate::test_support::StaticRoot;

    #[test]
    fn lays_out_unreleased_dir_under_root() {
        let project = Project::new("/work/repo");
        assert_eq!(
            project.unreleased_changes_path,
            PathBuf::from("/work/repo/releases/unreleased")
        );
        assert_eq!(project.config_path, PathBuf::from("/work/repo/.changelog.toml"));
    }

    #[test]
    fn discover_uses_resolver() {
        let project = Project::discover(&StaticRoot::at("/work/super")).expect("discover");
        assert_eq!(project.root, PathBuf::from("/work/super"));
    }

    #[test]
    fn discover_propagates_missing_root() {
        let err = Project::discover(&StaticRoot::missing()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EntryError>(),
            Some(EntryError::NoRepository { .. })
        ));
    }
}
