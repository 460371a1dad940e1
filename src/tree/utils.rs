//! Shared helpers for tree building

use std::path::{Component, Path, PathBuf};

use glob::Pattern;

use super::config::SortOrder;
use super::node::Node;

/// Display name for the root of a walk: its final component, or the whole
/// path when there is none (`/`, `.`, `..`).
pub fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Make `path` absolute against `cwd` and fold away `.` and `..` lexically.
///
/// Symlinks are not resolved, so the root keeps the name it was reached by.
pub fn resolve_root(path: &Path, cwd: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    if resolved.as_os_str().is_empty() {
        resolved.push(Component::CurDir);
    }
    resolved
}

/// Check if an entry name matches any of the ignore patterns.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Order a directory's children. Sorts are stable, so equal keys keep
/// discovery order.
pub fn sort_children(children: &mut [Node], order: SortOrder) {
    match order {
        SortOrder::Discovery => {}
        SortOrder::Name => children.sort_by(|a, b| a.name().cmp(b.name())),
        SortOrder::DirsFirst => children.sort_by(|a, b| {
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.name().cmp(b.name()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.rs", "main.rs"));
        assert!(!glob_match("*.rs", "main.py"));
        assert!(glob_match("test*", "test_foo"));
        assert!(!glob_match("test*", "foo_test"));

        // Single character wildcard
        assert!(glob_match("test?.rs", "test1.rs"));
        assert!(!glob_match("test?.rs", "test12.rs"));

        // Character classes
        assert!(glob_match("[abc].txt", "a.txt"));
        assert!(!glob_match("[abc].txt", "d.txt"));
    }

    #[test]
    fn test_should_ignore_name() {
        let patterns = vec!["target".to_string(), "*.log".to_string()];
        assert!(should_ignore_name("target", &patterns));
        assert!(should_ignore_name("debug.log", &patterns));
        assert!(!should_ignore_name("src", &patterns));
        assert!(!should_ignore_name("anything", &[]));
    }

    #[test]
    fn test_root_name() {
        assert_eq!(root_name(&PathBuf::from("/home/user/project")), "project");
        assert_eq!(root_name(&PathBuf::from("relative/dir/")), "dir");
        assert_eq!(root_name(&PathBuf::from("/")), "/");
        assert_eq!(root_name(&PathBuf::from(".")), ".");
    }

    #[test]
    fn test_resolve_root() {
        let cwd = Path::new("/work/R/B");
        assert_eq!(resolve_root(Path::new(".."), cwd), Path::new("/work/R"));
        assert_eq!(resolve_root(Path::new("."), cwd), Path::new("/work/R/B"));
        assert_eq!(resolve_root(Path::new("sub/.."), cwd), Path::new("/work/R/B"));
        assert_eq!(resolve_root(Path::new("./x/./y"), cwd), Path::new("/work/R/B/x/y"));
        assert_eq!(resolve_root(Path::new("/abs/../other"), cwd), Path::new("/other"));
        assert_eq!(resolve_root(Path::new("../../../.."), cwd), Path::new("/"));
        assert_eq!(root_name(&resolve_root(Path::new(".."), cwd)), "R");
        assert_eq!(resolve_root(Path::new("."), Path::new(".")), Path::new("."));
    }

    #[test]
    fn test_sort_children() {
        let unsorted = || {
            vec![
                Node::file("b.txt"),
                Node::dir("z", vec![]),
                Node::file("a.txt"),
                Node::dir("m", vec![]),
            ]
        };
        let names = |nodes: &[Node]| nodes.iter().map(|n| n.name().to_string()).collect::<Vec<_>>();

        let mut children = unsorted();
        sort_children(&mut children, SortOrder::Discovery);
        assert_eq!(names(&children), ["b.txt", "z", "a.txt", "m"]);

        let mut children = unsorted();
        sort_children(&mut children, SortOrder::Name);
        assert_eq!(names(&children), ["a.txt", "b.txt", "m", "z"]);

        let mut children = unsorted();
        sort_children(&mut children, SortOrder::DirsFirst);
        assert_eq!(names(&children), ["m", "z", "a.txt", "b.txt"]);
    }
}
