//! In-memory tree representation

use serde::Serialize;

/// One filesystem entry in a built tree.
///
/// Directories own their children; files have none by construction.
/// Sockets, FIFOs and device nodes are represented as `File`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File { name: String },
    Dir { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File { name: name.into() }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name } => name,
            Node::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    /// Child nodes in stored order. Always empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Dir { children, .. } => children,
        }
    }

    /// Number of `(directories, files)` below this node, not counting itself.
    pub fn count(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), child| {
                let (d, f) = child.count();
                if child.is_dir() {
                    (dirs + d + 1, files + f)
                } else {
                    (dirs + d, files + f + 1)
                }
            })
    }

    /// Levels below this node to the deepest descendant (0 for a leaf).
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
