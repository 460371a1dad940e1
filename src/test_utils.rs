//! Test utilities: an in-memory filesystem and temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fs::{Entry, FileSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockKind {
    File,
    Dir,
    /// A directory whose listing fails with `PermissionDenied`.
    Unlistable,
    /// Shows up in its parent's listing but does not resolve.
    Dangling,
    /// Cannot be stat'ed or listed: `PermissionDenied` on a parent.
    Unreachable,
}

/// In-memory filesystem with a fixed listing order.
///
/// Entries are listed in the order they were added. Every trait call is
/// counted, and listed directories are recorded, so tests can assert exactly
/// how much of the filesystem a walk touched.
#[derive(Debug, Default)]
pub struct MockFs {
    entries: Vec<(PathBuf, MockKind)>,
    calls: Cell<usize>,
    listed: RefCell<Vec<PathBuf>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.with(path, MockKind::Dir)
    }

    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with(path, MockKind::File)
    }

    pub fn with_unlistable_dir(self, path: impl Into<PathBuf>) -> Self {
        self.with(path, MockKind::Unlistable)
    }

    pub fn with_dangling(self, path: impl Into<PathBuf>) -> Self {
        self.with(path, MockKind::Dangling)
    }

    pub fn with_unreachable(self, path: impl Into<PathBuf>) -> Self {
        self.with(path, MockKind::Unreachable)
    }

    fn with(mut self, path: impl Into<PathBuf>, kind: MockKind) -> Self {
        self.entries.push((path.into(), kind));
        self
    }

    /// Total number of filesystem calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Directories listed so far, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    fn kind(&self, path: &Path) -> Option<MockKind> {
        self.calls.set(self.calls.get() + 1);
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, kind)| *kind)
    }
}

impl FileSystem for MockFs {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.kind(path),
            Some(MockKind::Dir | MockKind::Unlistable)
        )
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        match self.kind(path) {
            Some(MockKind::Dir) => {}
            Some(MockKind::Unlistable | MockKind::Unreachable) => {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "Permission denied",
                ));
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "No such file or directory",
                ));
            }
        }

        self.listed.borrow_mut().push(path.to_path_buf());
        Ok(self
            .entries
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, _)| {
                let name = p.file_name()?.to_string_lossy().to_string();
                Some(Entry::new(name, p.clone()))
            })
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        matches!(
            self.kind(path),
            Some(MockKind::File | MockKind::Dir | MockKind::Unlistable)
        )
    }
}

/// A temporary directory tree on the host filesystem.
///
/// The directory is removed when dropped.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory, creating parent directories as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a chain of `levels` nested directories `d1/d2/...` under `path`.
    pub fn add_chain(&self, path: &str, levels: usize) -> PathBuf {
        let mut full_path = self.dir.path().join(path);
        for level in 1..=levels {
            full_path.push(format!("d{level}"));
        }
        fs::create_dir_all(&full_path).expect("Failed to create dir chain");
        full_path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_lists_in_insertion_order() {
        let fs = MockFs::new()
            .with_dir("/R")
            .with_file("/R/z")
            .with_file("/R/a")
            .with_dir("/R/sub")
            .with_file("/R/sub/deep");

        let names: Vec<_> = fs
            .list_entries(Path::new("/R"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["z", "a", "sub"]);
        assert_eq!(fs.calls(), 1);
    }

    #[test]
    fn test_mock_fs_failures() {
        let fs = MockFs::new()
            .with_unlistable_dir("/locked")
            .with_dangling("/link");

        assert!(fs.is_dir(Path::new("/locked")));
        assert_eq!(
            fs.list_entries(Path::new("/locked")).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert!(!fs.exists(Path::new("/link")));
        assert!(fs.listed().is_empty());
    }

    #[test]
    fn test_temp_tree_creates_entries() {
        let tree = TempTree::new();
        assert!(tree.add_file("a/b.txt", "b").is_file());
        assert!(tree.add_dir("c").is_dir());
        assert!(tree.add_chain("deep", 3).ends_with("deep/d1/d2/d3"));
    }
}
