//! Filesystem capability used by the tree builder
//!
//! The builder never touches `std::fs` directly. Everything it needs goes
//! through [`FileSystem`], so tests can substitute an in-memory tree with a
//! fixed listing order.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
}

impl Entry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Read-only filesystem operations needed to build a tree.
pub trait FileSystem {
    /// Whether `path` resolves to a directory. Symlinks are followed.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate entries of the directory at `path`, in iteration order.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>>;

    /// Whether `path` resolves to an existing entry. Symlinks are followed,
    /// so a dangling or looping link does not exist.
    fn exists(&self, path: &Path) -> bool;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        (**self).list_entries(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// The host filesystem, backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let entries = std::fs::read_dir(path)?
            .filter_map(|entry| match entry {
                Ok(e) => Some(Entry::new(e.file_name().to_string_lossy(), e.path())),
                Err(err) => {
                    debug!(dir = %path.display(), error = %err, "dropping unreadable listing entry");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempTree;

    #[test]
    fn test_host_fs_lists_entries() {
        let tree = TempTree::new();
        tree.add_file("a.txt", "a");
        tree.add_dir("b");

        let mut names: Vec<_> = HostFs
            .list_entries(tree.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.txt", "b"]);
    }

    #[test]
    fn test_host_fs_classifies() {
        let tree = TempTree::new();
        let file = tree.add_file("a.txt", "a");
        let dir = tree.add_dir("b");

        assert!(HostFs.exists(&file));
        assert!(!HostFs.is_dir(&file));
        assert!(HostFs.is_dir(&dir));
        assert!(!HostFs.exists(&tree.path().join("missing")));
    }

    #[test]
    fn test_host_fs_listing_missing_dir_fails() {
        let tree = TempTree::new();
        assert!(HostFs.list_entries(&tree.path().join("missing")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_host_fs_broken_symlink_does_not_exist() {
        let tree = TempTree::new();
        let link = tree.path().join("dangling");
        std::os::unix::fs::symlink("nowhere", &link).unwrap();

        assert!(!HostFs.exists(&link));
        assert!(!HostFs.is_dir(&link));
    }
}
